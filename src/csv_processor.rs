use anyhow::Context;

use crate::record::BabyRecord;

/// Header line of the output file.
pub const HEADER: [&str; 5] = ["year", "rank", "name", "gender", "rank_change"];

/// Writes records as CSV to any writer, header first, in the given order.
///
/// An absent rank change is written as an empty field.
pub fn write_records<W: std::io::Write>(writer: W, records: &[BabyRecord]) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    anyhow::Ok(())
}

/// Saves records to `output_path` as CSV.
///
/// # Errors
/// * If the file cannot be created or written.
pub fn save_records<P: AsRef<std::path::Path>>(output_path: P, records: &[BabyRecord]) -> anyhow::Result<()> {
    let path = output_path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_records(std::io::BufWriter::new(file), records)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    anyhow::Ok(())
}

/// Parses records from CSV with a header row.
pub fn parse_records<R: std::io::Read>(reader: R) -> anyhow::Result<Vec<BabyRecord>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut records = Vec::new();

    for result in reader.deserialize::<BabyRecord>() {
        records.push(result?);
    }

    anyhow::Ok(records)
}

/// Reads back a file written by `save_records`.
pub fn read_records<P: AsRef<std::path::Path>>(input_path: P) -> anyhow::Result<Vec<BabyRecord>> {
    let path = input_path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    parse_records(file).with_context(|| format!("Failed to parse {}", path.display()))
}
