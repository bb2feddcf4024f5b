//! Report manager: aggregates records and writes both dated charts.

use crate::{BarSeries, ChartRenderer, ChartStyle, StaffStudentChart, WeekdayHeatmap, WeekdayTotals};
use chrono::NaiveDate;
use covstat_common::{dated_filename, CovstatError, HeatRecord, Record, Result, BAR_CHART_SUFFIX, HEATMAP_SUFFIX};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes the staff/student bar chart and the weekday heatmap.
pub struct ReportManager {
    output_dir: PathBuf,
    style: ChartStyle,
    bar_chart: StaffStudentChart,
    heatmap: WeekdayHeatmap,
}

impl ReportManager {
    /// Creates a manager writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, style: ChartStyle) -> Self {
        Self {
            output_dir: output_dir.into(),
            style,
            bar_chart: StaffStudentChart::new(),
            heatmap: WeekdayHeatmap::new(),
        }
    }

    /// Directory the charts are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Paths of the two charts for `today`, bar chart first.
    pub fn report_paths(&self, today: NaiveDate) -> [PathBuf; 2] {
        [
            self.output_dir.join(dated_filename(today, BAR_CHART_SUFFIX)),
            self.output_dir.join(dated_filename(today, HEATMAP_SUFFIX)),
        ]
    }

    /// Render both charts, overwriting earlier files of the same name.
    ///
    /// The output directory is created if it is missing.
    pub fn generate(&self, records: &[Record], heat_records: &[HeatRecord], today: NaiveDate) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            CovstatError::graph_with_source(
                format!("Cannot create output directory {}", self.output_dir.display()),
                e,
            )
        })?;

        let [bar_path, heatmap_path] = self.report_paths(today);

        self.bar_chart
            .render_to_file(&BarSeries::from_records(records), &self.style, &bar_path)?;
        self.heatmap
            .render_to_file(&WeekdayTotals::from_heat_records(heat_records), &self.style, &heatmap_path)?;

        info!(dir = %self.output_dir.display(), "wrote reports");
        Ok(vec![bar_path, heatmap_path])
    }
}
