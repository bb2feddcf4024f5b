//! Conversion of validated rows into typed, sorted records.

use crate::date::DateParser;
use chrono::NaiveDate;
use covstat_common::{CovstatError, HeatRecord, Record, Result, ValidatedRow};
use tracing::debug;

/// Parse rows into date-sorted [`Record`]s with the default date parser.
pub fn transform(rows: &[ValidatedRow]) -> Result<Vec<Record>> {
    transform_with(rows, &DateParser::default())
}

/// Parse rows into date-sorted [`Record`]s.
pub fn transform_with(rows: &[ValidatedRow], parser: &DateParser) -> Result<Vec<Record>> {
    let mut records = rows
        .iter()
        .map(|row| parse_row(row, parser).map(|(date, values)| Record::new(date, values)))
        .collect::<Result<Vec<_>>>()?;
    records.sort();

    debug!(records = records.len(), "transformed rows");
    Ok(records)
}

/// Parse rows into weekday-sorted [`HeatRecord`]s with the default date parser.
pub fn heat_transform(rows: &[ValidatedRow]) -> Result<Vec<HeatRecord>> {
    heat_transform_with(rows, &DateParser::default())
}

/// Parse rows into [`HeatRecord`]s sorted by weekday, then date, then values.
pub fn heat_transform_with(rows: &[ValidatedRow], parser: &DateParser) -> Result<Vec<HeatRecord>> {
    let mut records = rows
        .iter()
        .map(|row| parse_row(row, parser).map(|(date, values)| HeatRecord::new(date, values)))
        .collect::<Result<Vec<_>>>()?;
    records.sort();

    debug!(records = records.len(), "transformed rows for weekday heatmap");
    Ok(records)
}

/// Parse a count cell. Surrounding whitespace and a leading sign are allowed.
pub fn parse_count(cell: &str) -> Result<i64> {
    cell.trim().parse().map_err(|_| {
        CovstatError::format_value(format!("'{cell}' is not an integer count"), cell)
    })
}

fn parse_row(row: &ValidatedRow, parser: &DateParser) -> Result<(NaiveDate, Vec<i64>)> {
    let (first, rest) = row
        .split_first()
        .ok_or_else(|| CovstatError::format("row has no date cell"))?;
    let date = parser.parse(first)?;
    let values = rest.iter().map(|cell| parse_count(cell)).collect::<Result<_>>()?;
    Ok((date, values))
}
