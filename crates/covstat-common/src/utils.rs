//! Shared utility functions.

use chrono::{Local, NaiveDate};

/// Suffix of the grouped staff/student bar chart image.
pub const BAR_CHART_SUFFIX: &str = "staff-student-covid-cases.png";

/// Suffix of the weekday heatmap image.
pub const HEATMAP_SUFFIX: &str = "covid-cases-by-weekday.png";

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// File name stamped with `date`, e.g. `2020-10-11-covid-cases-by-weekday.png`.
pub fn dated_filename(date: NaiveDate, suffix: &str) -> String {
    format!("{}-{suffix}", date.format("%Y-%m-%d"))
}

/// Collapses runs of whitespace into single spaces and trims both ends.
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
