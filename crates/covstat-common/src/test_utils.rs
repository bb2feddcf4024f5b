//! Test utilities and shared fixtures for covstat.
//!
//! This module provides a captured copy of the dashboard markup and a few
//! row builders so that every crate in the workspace can exercise the
//! pipeline without touching the network.

use crate::{RawRow, ValidatedRow};
use chrono::NaiveDate;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Shorthand for a calendar date in tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Build a raw row where every cell has text.
pub fn raw_row(cells: &[&str]) -> RawRow {
    cells.iter().map(|c| Some((*c).to_string())).collect()
}

/// Build a validated row.
pub fn validated_row(cells: &[&str]) -> ValidatedRow {
    cells.iter().map(|c| (*c).to_string()).collect()
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Dashboard fixtures modelled on the published statistics page.
pub mod dashboard_fixtures {
    /// A page shaped like the live dashboard: a legend row, several data
    /// rows with footnote markers, and unrelated markup around the table.
    pub const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>COVID-19 statistics | The University of Sheffield</title></head>
<body>
  <nav><ul><li><a href="/">Home</a></li><li>Autumn term 2020</li></ul></nav>
  <main>
    <h1>COVID-19 statistics</h1>
    <p>Figures are updated daily. * Figures revised after publication.
    <table class="stats">
      <thead>
        <tr><th>Day</th><th>New staff cases</th><th>New student cases</th></tr>
      </thead>
      <tbody>
        <tr><td>12 October 2020</td><td>3</td><td>104*</td></tr>
        <tr><td>11 October 2020*</td><td>5*</td><td>12</td></tr>
        <tr><td>10 October 2020</td><td>0</td><td>97</td></tr>
        <tr><td>9 October 2020</td><td>2</td><td>151</td></tr>
      </tbody>
    </table>
  </main>
  <footer><p>&copy; 2020 The University of Sheffield</footer>
</body>
</html>"#;

    /// A page whose legend row lacks the expected labels.
    pub const BAD_HEADER_HTML: &str = r#"<html><body><table>
<tr><th>Day</th><th>Foo</th><th>Bar</th></tr>
<tr><td>11 October 2020</td><td>5</td><td>12</td></tr>
</table></body></html>"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_raw_row_wraps_every_cell() {
        let row = raw_row(&["Day", "New staff cases"]);
        assert_eq!(row, vec![Some("Day".to_string()), Some("New staff cases".to_string())]);
    }

    #[test]
    fn test_fixture_contains_table() {
        assert!(dashboard_fixtures::DASHBOARD_HTML.contains("<table"));
        assert!(dashboard_fixtures::BAD_HEADER_HTML.contains("Foo"));
    }
}
