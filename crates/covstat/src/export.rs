//! CSV and JSON export of the parsed records.

use covstat_common::{Record, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Header row of the CSV export.
pub const CSV_HEADER: [&str; 3] = ["Date", "New staff cases", "New student cases"];

/// Which export a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma separated values with a header row
    Csv,
    /// One JSON array of `[date, staff, students]` arrays
    Json,
}

/// Pick at most one export; CSV wins when both are requested.
pub fn select_export<'a>(csv: Option<&'a Path>, json: Option<&'a Path>) -> Option<(ExportFormat, &'a Path)> {
    csv.map(|path| (ExportFormat::Csv, path))
        .or_else(|| json.map(|path| (ExportFormat::Json, path)))
}

/// Write `records` to `path` in `format`.
pub fn write(format: ExportFormat, path: &Path, records: &[Record]) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(path, records),
        ExportFormat::Json => write_json(path, records),
    }
}

/// Write the records as CSV, one dated row per record.
pub fn write_csv(path: &Path, records: &[Record]) -> Result<()> {
    write_csv_to(File::create(path)?, records)?;
    info!(path = %path.display(), records = records.len(), "wrote CSV export");
    Ok(())
}

/// CSV export into any writer.
pub fn write_csv_to<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for record in records {
        let mut row = Vec::with_capacity(record.values.len() + 1);
        row.push(record.iso_date());
        row.extend(record.values.iter().map(ToString::to_string));
        csv.write_record(&row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the records as a JSON array of arrays.
pub fn write_json(path: &Path, records: &[Record]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json_to(&mut writer, records)?;
    writer.flush()?;
    info!(path = %path.display(), records = records.len(), "wrote JSON export");
    Ok(())
}

/// JSON export into any writer.
pub fn write_json_to<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    serde_json::to_writer(writer, records)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use covstat_common::test_utils::date;

    fn records() -> Vec<Record> {
        vec![Record::new(date(2020, 10, 11), vec![5, 12])]
    }

    #[test]
    fn test_csv_output() {
        let mut buffer = Vec::new();
        write_csv_to(&mut buffer, &records()).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Date,New staff cases,New student cases\n2020-10-11,5,12\n"
        );
    }

    #[test]
    fn test_csv_header_only_when_empty() {
        let mut buffer = Vec::new();
        write_csv_to(&mut buffer, &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Date,New staff cases,New student cases\n");
    }

    #[test]
    fn test_csv_rows_of_any_width() {
        let records = vec![
            Record::new(date(2020, 10, 11), vec![5, 12, 17]),
            Record::new(date(2020, 10, 12), vec![5]),
        ];
        let mut buffer = Vec::new();
        write_csv_to(&mut buffer, &records).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Date,New staff cases,New student cases\n2020-10-11,5,12,17\n2020-10-12,5\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &records()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), r#"[["2020-10-11",5,12]]"#);
    }

    #[test]
    fn test_csv_wins_over_json() {
        let (csv, json) = (Path::new("a.csv"), Path::new("a.json"));
        assert_eq!(select_export(Some(csv), Some(json)), Some((ExportFormat::Csv, csv)));
        assert_eq!(select_export(None, Some(json)), Some((ExportFormat::Json, json)));
        assert_eq!(select_export(None, None), None);
    }
}
