//! Table row extraction.

use covstat_common::{collapse_whitespace, RawRow};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("CSS selector for table rows should be valid"));

/// Every `<tr>` in the document, in document order, as cell texts.
///
/// Rows are not scoped to a particular table. Only the row's own `td`/`th`
/// children count as its cells, so a table nested inside a cell does not
/// leak into the outer row.
pub fn extract(document: &Html) -> Vec<RawRow> {
    let rows: Vec<RawRow> = document.select(&ROW_SELECTOR).map(row_cells).collect();
    debug!(rows = rows.len(), "extracted table rows");
    rows
}

fn row_cells(row: ElementRef<'_>) -> RawRow {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .map(cell_text)
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> Option<String> {
    let text = collapse_whitespace(&cell.text().collect::<String>());
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::parse_document;
    use covstat_common::test_utils::{dashboard_fixtures::DASHBOARD_HTML, raw_row};

    #[test]
    fn test_extract_fixture_rows() {
        let rows = extract(&parse_document(DASHBOARD_HTML));

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], raw_row(&["Day", "New staff cases", "New student cases"]));
        assert_eq!(rows[2], raw_row(&["11 October 2020*", "5*", "12"]));
    }

    #[test]
    fn test_empty_cells_are_none() {
        let document = parse_document("<table><tr><td>12 October 2020</td><td> </td><td></td></tr></table>");
        let rows = extract(&document);
        assert_eq!(rows, vec![vec![Some("12 October 2020".to_string()), None, None]]);
    }

    #[test]
    fn test_cell_text_includes_inline_markup() {
        let document =
            parse_document("<table><tr><td><strong>11</strong> October\n 2020</td><td>5<sup>*</sup></td></tr></table>");
        let rows = extract(&document);
        assert_eq!(rows, vec![raw_row(&["11 October 2020", "5*"])]);
    }

    #[test]
    fn test_nested_rows_are_separate() {
        let document = parse_document(
            "<table><tr><td>outer</td><td><table><tr><td>inner</td></tr></table></td></tr></table>",
        );
        let rows = extract(&document);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1], raw_row(&["inner"]));
    }

    #[test]
    fn test_rows_outside_tables_are_ignored_by_parser() {
        // The HTML5 parser drops a bare <tr> that has no table ancestor.
        let rows = extract(&parse_document("<div><tr><td>stray</td></tr></div>"));
        assert!(rows.is_empty());
    }
}
