//! Permissive parsing of human-formatted dates.
//!
//! The dashboard writes dates the way people do ("11 October 2020",
//! "Sunday 11th October", "11/10/2020"). [`DateParser`] normalizes the
//! noise away and then tries a fixed list of layouts.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use covstat_common::{today, CovstatError, Result};

const WEEKDAY_TOKENS: [&str; 14] = [
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "mon", "tue",
    "wed", "thu", "fri", "sat", "sun",
];

const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

const TEXT_FORMATS: [&str; 5] = ["%d %B %Y", "%B %d %Y", "%Y %B %d", "%d-%B-%Y", "%B %Y %d"];

const YEARLESS_FORMATS: [&str; 2] = ["%d %B %Y", "%B %d %Y"];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Natural-language date parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParser {
    /// Read `11/10/2020` as 11 October rather than November 10
    pub day_first: bool,
    /// Year used when the input names none
    pub default_year: i32,
}

impl Default for DateParser {
    fn default() -> Self {
        Self {
            day_first: false,
            default_year: today().year(),
        }
    }
}

impl DateParser {
    /// Create a parser with explicit settings.
    pub const fn new(day_first: bool, default_year: i32) -> Self {
        Self {
            day_first,
            default_year,
        }
    }

    /// Parse `input` into a calendar date.
    pub fn parse(&self, input: &str) -> Result<NaiveDate> {
        let trimmed = input.trim();
        let unrecognised = || CovstatError::format_value(format!("unrecognised date '{input}'"), input);

        if let Some(date) = parse_timestamp(trimmed) {
            return Ok(date);
        }

        let normalized = normalize(trimmed);
        if normalized.is_empty() {
            return Err(unrecognised());
        }

        if let Some(date) = self.parse_numeric(&normalized) {
            return Ok(date);
        }

        if let Some(date) = TEXT_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(&normalized, format).ok())
        {
            return Ok(date);
        }

        if normalized.split(' ').count() == 2 {
            let with_year = format!("{normalized} {}", self.default_year);
            if let Some(date) = YEARLESS_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(&with_year, format).ok())
            {
                return Ok(date);
            }
        }

        Err(unrecognised())
    }

    /// `YYYY-MM-DD`, `YYYY/MM/DD`, and the ambiguous `a/b/YYYY` family.
    fn parse_numeric(&self, input: &str) -> Option<NaiveDate> {
        let separator = ['/', '-', '.'].into_iter().find(|sep| input.contains(*sep))?;
        let parts: Vec<&str> = input.split(separator).collect();
        if parts.len() != 3 || !parts.iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit())) {
            return None;
        }

        let numbers: Vec<u32> = parts.iter().map(|p| p.parse().ok()).collect::<Option<_>>()?;
        if parts[0].len() == 4 {
            return NaiveDate::from_ymd_opt(i32::try_from(numbers[0]).ok()?, numbers[1], numbers[2]);
        }

        let year = match numbers[2] {
            y @ 0..=99 => 2000 + y,
            y => y,
        };
        let year = i32::try_from(year).ok()?;
        let (first, second) = (numbers[0], numbers[1]);
        let (month, day) = if self.day_first { (second, first) } else { (first, second) };

        NaiveDate::from_ymd_opt(year, month, day).or_else(|| NaiveDate::from_ymd_opt(year, day, month))
    }
}

fn parse_timestamp(input: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|datetime| datetime.date())
}

/// Drop weekday names, ordinal suffixes, and commas.
fn normalize(input: &str) -> String {
    input
        .replace(',', " ")
        .split_whitespace()
        .filter(|token| !is_weekday(token))
        .map(strip_ordinal)
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_weekday(token: &str) -> bool {
    let token = token.trim_end_matches('.').to_ascii_lowercase();
    WEEKDAY_TOKENS.contains(&token.as_str())
}

fn strip_ordinal(token: &str) -> &str {
    for suffix in ORDINAL_SUFFIXES {
        if let Some(digits) = token
            .len()
            .checked_sub(suffix.len())
            .filter(|&at| token.is_char_boundary(at) && token[at..].eq_ignore_ascii_case(suffix))
            .map(|at| &token[..at])
        {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return digits;
            }
        }
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use covstat_common::test_utils::date;

    fn parser() -> DateParser {
        DateParser::new(false, 2020)
    }

    #[test]
    fn test_parse_day_month_year() {
        assert_eq!(parser().parse("11 October 2020").unwrap(), date(2020, 10, 11));
        assert_eq!(parser().parse("9 Oct 2020").unwrap(), date(2020, 10, 9));
        assert_eq!(parser().parse("  11   october 2020 ").unwrap(), date(2020, 10, 11));
    }

    #[test]
    fn test_parse_month_day_year() {
        assert_eq!(parser().parse("October 11, 2020").unwrap(), date(2020, 10, 11));
    }

    #[test]
    fn test_parse_with_weekday_and_ordinal() {
        assert_eq!(parser().parse("Sunday 11th October 2020").unwrap(), date(2020, 10, 11));
        assert_eq!(parser().parse("Thu, 1st October 2020").unwrap(), date(2020, 10, 1));
        assert_eq!(parser().parse("22nd October 2020").unwrap(), date(2020, 10, 22));
    }

    #[test]
    fn test_parse_iso_forms() {
        assert_eq!(parser().parse("2020-10-11").unwrap(), date(2020, 10, 11));
        assert_eq!(parser().parse("2020/10/11").unwrap(), date(2020, 10, 11));
        assert_eq!(parser().parse("2020-10-11T09:30:00").unwrap(), date(2020, 10, 11));
        assert_eq!(parser().parse("2020-10-11T09:30:00+01:00").unwrap(), date(2020, 10, 11));
    }

    #[test]
    fn test_numeric_month_first_by_default() {
        assert_eq!(parser().parse("11/10/2020").unwrap(), date(2020, 11, 10));
        assert_eq!(DateParser::new(true, 2020).parse("11/10/2020").unwrap(), date(2020, 10, 11));
    }

    #[test]
    fn test_numeric_swaps_when_preferred_order_invalid() {
        assert_eq!(parser().parse("25/10/2020").unwrap(), date(2020, 10, 25));
        assert_eq!(parser().parse("25.10.20").unwrap(), date(2020, 10, 25));
    }

    #[test]
    fn test_yearless_takes_default_year() {
        assert_eq!(parser().parse("11 October").unwrap(), date(2020, 10, 11));
        assert_eq!(DateParser::new(false, 2021).parse("October 11").unwrap(), date(2021, 10, 11));
    }

    #[test]
    fn test_rejects_garbage() {
        for input in ["", "   ", "Day", "yesterday", "31 February 2020", "5", "11 Octember 2020"] {
            let error = parser().parse(input).unwrap_err();
            assert!(matches!(error, CovstatError::Format { .. }), "accepted {input:?}");
        }
    }

    #[test]
    fn test_strip_ordinal_leaves_words() {
        assert_eq!(strip_ordinal("11th"), "11");
        assert_eq!(strip_ordinal("1ST"), "1");
        assert_eq!(strip_ordinal("North"), "North");
        assert_eq!(strip_ordinal("th"), "th");
    }
}
