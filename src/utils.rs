use crate::record::BabyRecord;

/// Formats a rank change with an explicit sign, or `-` when absent.
pub fn format_rank_change(change: Option<i64>) -> String {
    match change {
        Some(c) => format!("{:+}", c),
        None => "-".to_string(),
    }
}

/// Prints the first `count` records in a human-readable form.
///
/// # Example Output
/// ```text
///  - 2002 M #2    Michael        change: +1
///  - 2002 M #3    Jacob          change: -
/// ```
pub fn print_records(records: &[BabyRecord], count: usize) {
    for record in records.iter().take(count) {
        println!(
            " - {} {} #{:<4} {:<14} change: {}",
            record.year,
            record.gender,
            record.rank,
            record.name,
            format_rank_change(record.rank_change),
        );
    }
}

/// Largest rank gain and largest rank drop among records with a change.
///
/// A gain is a negative change (moving towards rank 1).
pub fn extreme_changes(records: &[BabyRecord]) -> (Option<&BabyRecord>, Option<&BabyRecord>) {
    let with_change = || records.iter().filter(|r| r.rank_change.is_some());
    let gain = with_change()
        .filter(|r| r.rank_change < Some(0))
        .min_by_key(|r| r.rank_change);
    let drop = with_change()
        .filter(|r| r.rank_change > Some(0))
        .max_by_key(|r| r.rank_change);
    (gain, drop)
}
