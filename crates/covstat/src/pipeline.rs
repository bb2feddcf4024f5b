//! The scrape pipeline and the statistics query.

use crate::export::{self, select_export};
use crate::Args;
use chrono::{Datelike, NaiveDate};
use covstat_common::{today, HeatRecord, Record, Result};
use covstat_config::{Config, OutputConfig};
use covstat_graphs::{ChartStyle, ReportManager};
use covstat_ingest::{extract, heat_transform_with, transform_with, validate, DateParser, Fetcher, Html, StatsApiClient};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Records produced from one dashboard page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutput {
    /// Sorted by date
    pub records: Vec<Record>,
    /// Sorted by weekday, then date
    pub heat_records: Vec<HeatRecord>,
}

/// Extract, validate, and transform a parsed page. No I/O.
pub fn run_pipeline(document: &Html, parser: &DateParser) -> Result<PipelineOutput> {
    let rows = validate(&extract(document))?;
    Ok(PipelineOutput {
        records: transform_with(&rows, parser)?,
        heat_records: heat_transform_with(&rows, parser)?,
    })
}

/// Chart style from the output settings.
pub fn chart_style(output: &OutputConfig) -> ChartStyle {
    ChartStyle::new(
        output.width,
        output.height,
        output.staff_color.clone(),
        output.student_color.clone(),
    )
}

/// Print each record on its own line.
pub fn print_records<W: Write>(out: &mut W, records: &[Record]) -> Result<()> {
    for record in records {
        writeln!(out, "{record}")?;
    }
    Ok(())
}

/// Fetch the dashboard, print the records, render the charts, and export.
///
/// Returns the pipeline output and the paths of every file written.
pub fn run(config: &Config, args: &Args) -> Result<(PipelineOutput, Vec<PathBuf>)> {
    let date = today();
    let document = Fetcher::new(&config.dashboard)?.fetch()?;
    let output = run_pipeline(&document, &DateParser::new(config.dashboard.day_first, date.year()))?;
    info!(records = output.records.len(), "parsed dashboard table");

    print_records(&mut std::io::stdout().lock(), &output.records)?;

    let written = report(config, args, &output, date)?;
    Ok((output, written))
}

/// Render the charts and perform the requested export.
pub fn report(config: &Config, args: &Args, output: &PipelineOutput, date: NaiveDate) -> Result<Vec<PathBuf>> {
    let manager = ReportManager::new(&config.output.directory, chart_style(&config.output));
    let mut written = manager.generate(&output.records, &output.heat_records, date)?;

    if let Some((format, path)) = select_export(args.csv.as_deref(), args.json.as_deref()) {
        debug!(?format, "exporting records");
        export::write(format, path, &output.records)?;
        written.push(path.to_path_buf());
    }

    Ok(written)
}

/// Query the statistics API for the latest figures.
pub fn run_stats(config: &Config) -> Result<serde_json::Value> {
    let client = StatsApiClient::new(
        &config.stats_api,
        config.dashboard.timeout_seconds,
        &config.dashboard.user_agent,
    )?;
    client.latest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use covstat_common::test_utils::dashboard_fixtures::{BAD_HEADER_HTML, DASHBOARD_HTML};
    use covstat_common::test_utils::date;
    use covstat_common::CovstatError;
    use covstat_ingest::parse_document;

    fn parser() -> DateParser {
        DateParser::new(false, 2020)
    }

    #[test]
    fn test_run_pipeline_on_fixture() {
        let output = run_pipeline(&parse_document(DASHBOARD_HTML), &parser()).unwrap();

        assert_eq!(output.records.len(), 4);
        assert_eq!(output.records[0].date, date(2020, 10, 9));
        assert_eq!(output.heat_records[0].date, date(2020, 10, 12));
    }

    #[test]
    fn test_run_pipeline_bad_header() {
        let error = run_pipeline(&parse_document(BAD_HEADER_HTML), &parser()).unwrap_err();
        assert!(matches!(error, CovstatError::Schema { .. }));
    }

    #[test]
    fn test_print_records() {
        let output = run_pipeline(&parse_document(DASHBOARD_HTML), &parser()).unwrap();
        let mut out = Vec::new();
        print_records(&mut out, &output.records).unwrap();

        let printed = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], r#"["2020-10-11", 5, 12]"#);
    }

    #[test]
    fn test_chart_style_from_config() {
        let style = chart_style(&OutputConfig::default());
        assert_eq!(style.dimensions(), (1600, 1000));
        assert_eq!(style.staff_color, "#1f77b4");
    }
}
