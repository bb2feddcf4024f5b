//! Row validation: drops legend rows and strips footnote markers.

use covstat_common::{CovstatError, RawRow, Result, ValidatedRow};
use tracing::debug;

/// Substring of the first cell that marks a header/legend row.
pub const HEADER_MARKER: &str = "Day";

/// Label expected in the second cell of a header row.
pub const STAFF_LABEL: &str = "New staff";

/// Label expected in the third cell of a header row.
pub const STUDENT_LABEL: &str = "New student";

/// Trailing character the dashboard uses to flag a footnote.
pub const FOOTNOTE_MARKER: char = '*';

/// Remove header rows and footnote markers.
///
/// A row whose first cell contains `"Day"` must carry the staff and
/// student labels in its next two cells; such rows are dropped. A header
/// row without those labels aborts with a schema error. Every other row is
/// kept with a single trailing `*` removed from each cell.
pub fn validate(rows: &[RawRow]) -> Result<Vec<ValidatedRow>> {
    let mut validated = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let Some(first) = row.first() else {
            return Err(CovstatError::schema_at_row(
                format!("row {index} has no cells"),
                index,
            ));
        };

        if first.as_deref().is_some_and(|cell| cell.contains(HEADER_MARKER)) {
            check_header(row, index)?;
            debug!(row = index, "dropped header row");
            continue;
        }

        validated.push(
            row.iter()
                .map(|cell| strip_footnote(cell.as_deref().unwrap_or_default()).to_string())
                .collect(),
        );
    }

    debug!(kept = validated.len(), total = rows.len(), "validated rows");
    Ok(validated)
}

/// Remove exactly one trailing footnote marker, if present.
pub fn strip_footnote(cell: &str) -> &str {
    cell.strip_suffix(FOOTNOTE_MARKER).unwrap_or(cell)
}

fn check_header(row: &RawRow, index: usize) -> Result<()> {
    let label = |column: usize| row.get(column).and_then(|cell| cell.as_deref());

    for (column, expected) in [(1, STAFF_LABEL), (2, STUDENT_LABEL)] {
        match label(column) {
            Some(found) if found.contains(expected) => {}
            found => {
                return Err(CovstatError::schema_at_row(
                    format!(
                        "header row {index} column {column}: expected '{expected}', found {found:?}"
                    ),
                    index,
                ));
            }
        }
    }

    Ok(())
}
