use crate::error::ExtractError;
use crate::extractor::Extractor;
use crate::ranking::RankDeltaCalculator;
use crate::record::BabyRecord;

/// Extracts and ranks every year in `years`, oldest first.
///
/// Each year contributes its male records followed by its female records.
/// A missing year document aborts the run unless `skip_missing` is set, in
/// which case the year is skipped and the next year gets no rank changes.
///
/// # Arguments
/// * `input_dir` - Directory holding `{year}.{extension}` documents.
/// * `years` - Inclusive range of years to process.
/// * `extension` - Document file extension.
/// * `skip_missing` - Skip absent documents instead of failing.
///
/// # Returns
/// * `anyhow::Result<Vec<BabyRecord>>` - All records of the run, in year order.
pub fn process_years<P: AsRef<std::path::Path>>(
    input_dir: P,
    years: std::ops::RangeInclusive<i32>,
    extension: &str,
    skip_missing: bool,
) -> anyhow::Result<Vec<BabyRecord>> {
    let total = years.clone().count() as u64;
    let pb = indicatif::ProgressBar::new(total);
    pb.set_style(
        indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut calculator = RankDeltaCalculator::new();
    let mut records = Vec::new();

    for year in years {
        pb.set_message(year.to_string());
        match process_year(&mut calculator, &pb, input_dir.as_ref(), year, extension, skip_missing) {
            Ok(year_records) => records.extend(year_records),
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    anyhow::Ok(records)
}

/// Extracts and ranks a single year, skipping it when allowed and absent.
fn process_year(
    calculator: &mut RankDeltaCalculator,
    pb: &indicatif::ProgressBar,
    input_dir: &std::path::Path,
    year: i32,
    extension: &str,
    skip_missing: bool,
) -> anyhow::Result<Vec<BabyRecord>> {
    match Extractor::open_with_extension(input_dir, year, extension) {
        Ok(extractor) => {
            let year_records = calculator.process_year(&extractor)?;
            tracing::debug!(
                "Year {}: {} rows, {} records",
                year,
                extractor.len(),
                year_records.len()
            );
            anyhow::Ok(year_records)
        }
        Err(e @ ExtractError::SourceNotFound { .. }) if skip_missing => {
            if let Some(path) = e.path() {
                pb.suspend(|| tracing::warn!("Skipping {}: no such file {}", year, path.display()));
            }
            calculator.skip_year(year)?;
            anyhow::Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Gender;

    fn tmp_dir(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("babyname_run_{}", name));
        let _ = std::fs::remove_dir_all(&p);
        std::fs::create_dir_all(&p).unwrap();
        p
    }

    fn write_year(dir: &std::path::Path, year: i32, rows: &[(&str, &str)]) {
        let mut html = String::from("<table summary=\"Popularity for top 1000\">\n");
        for (i, (male, female)) in rows.iter().enumerate() {
            html.push_str(&format!(
                "<tr align=\"right\"><td>{}</td> <td>{}</td> <td>{}</td>\n",
                i + 1,
                male,
                female
            ));
        }
        html.push_str("</table>\n");
        std::fs::write(dir.join(format!("{}.html", year)), html).unwrap();
    }

    fn male<'a>(records: &'a [BabyRecord], year: i32, name: &str) -> &'a BabyRecord {
        records
            .iter()
            .find(|r| r.year == year && r.name == name && r.gender == Gender::Male)
            .unwrap()
    }

    #[test]
    fn computes_changes_across_years() {
        let dir = tmp_dir("changes");
        write_year(&dir, 2001, &[("Michael", "Emily"), ("Jacob", "Hannah")]);
        write_year(&dir, 2002, &[("Jacob", "Emily"), ("Michael", "Madison")]);

        let records = process_years(&dir, 2001..=2002, "html", false).unwrap();

        assert_eq!(records.len(), 8);
        assert_eq!(male(&records, 2001, "Michael").rank_change, None);
        assert_eq!(male(&records, 2002, "Michael").rank, 2);
        assert_eq!(male(&records, 2002, "Michael").rank_change, Some(1));
        assert_eq!(male(&records, 2002, "Jacob").rank_change, Some(-1));
    }

    #[test]
    fn new_name_has_no_change() {
        let dir = tmp_dir("new_name");
        write_year(&dir, 2001, &[("Jacob", "Emily")]);
        write_year(&dir, 2002, &[("Jacob", "Emily"), ("Michael", "Emily")]);

        let records = process_years(&dir, 2001..=2002, "html", false).unwrap();
        assert_eq!(male(&records, 2002, "Michael").rank_change, None);
    }

    #[test]
    fn records_are_grouped_by_year() {
        let dir = tmp_dir("grouped");
        write_year(&dir, 2001, &[("Jacob", "Emily")]);
        write_year(&dir, 2002, &[("Jacob", "Emily")]);

        let records = process_years(&dir, 2001..=2002, "html", false).unwrap();
        let years: Vec<i32> = records.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2001, 2001, 2002, 2002]);
    }

    #[test]
    fn missing_year_aborts_by_default() {
        let dir = tmp_dir("abort");
        write_year(&dir, 2001, &[("Jacob", "Emily")]);

        let err = process_years(&dir, 2001..=2002, "html", false).unwrap_err();
        match err.downcast_ref::<ExtractError>() {
            Some(ExtractError::SourceNotFound { path }) => {
                assert_eq!(path, &dir.join("2002.html"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn missing_year_can_be_skipped() {
        let dir = tmp_dir("skip");
        write_year(&dir, 2001, &[("Jacob", "Emily")]);
        write_year(&dir, 2003, &[("Jacob", "Emily")]);

        let records = process_years(&dir, 2001..=2003, "html", true).unwrap();

        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.year != 2002));
        assert_eq!(male(&records, 2003, "Jacob").rank_change, None);
    }

    #[test]
    fn unreadable_year_aborts_even_when_skipping() {
        let dir = tmp_dir("unreadable");
        write_year(&dir, 2001, &[("Jacob", "Emily")]);
        std::fs::create_dir_all(dir.join("2002.html")).unwrap();

        let err = process_years(&dir, 2001..=2002, "html", true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::Read { .. })
        ));
    }
}
