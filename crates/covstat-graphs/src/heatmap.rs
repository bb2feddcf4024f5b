//! Weekday heatmap: students and staff against Monday..Sunday.

use crate::{contrast_text_color, normalize, parse_color, viridis, ChartRenderer, ChartStyle, WeekdayTotals, HEATMAP_ROW_LABELS};
use covstat_common::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::{debug, info};

/// 2x7 grid of case totals, one colored cell per population and weekday.
#[derive(Debug, Clone)]
pub struct WeekdayHeatmap {
    title: String,
}

impl Default for WeekdayHeatmap {
    fn default() -> Self {
        Self {
            title: "Case rates per weekday".to_string(),
        }
    }
}

impl WeekdayHeatmap {
    /// Heatmap with the standard title.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plot-space centre of a grid cell. Row 0 is drawn on top.
    #[allow(clippy::cast_precision_loss)]
    fn cell_centre(row: usize, column: usize) -> (f64, f64) {
        (column as f64, (HEATMAP_ROW_LABELS.len() - 1 - row) as f64)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn tick_label(value: f64, labels: &[&str]) -> String {
        let nearest = value.round();
        if (value - nearest).abs() > 1e-6 || nearest < 0.0 {
            return String::new();
        }
        labels
            .get(nearest as usize)
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

impl ChartRenderer for WeekdayHeatmap {
    type Data = WeekdayTotals;

    fn render_to_file(&self, totals: &WeekdayTotals, style: &ChartStyle, path: &Path) -> Result<()> {
        let background = parse_color(&style.background_color)?;
        let (min, max) = (totals.min(), totals.max());

        let root = BitMapBackend::new(path, style.dimensions()).into_drawing_area();
        root.fill(&background)?;

        let title_font = (style.title_font.family.as_str(), style.title_font.size);
        let axis_font = (style.axis_font.family.as_str(), style.axis_font.size);
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, title_font)
            .margin(style.margin)
            .x_label_area_size(style.axis_font.size * 3)
            .y_label_area_size(style.axis_font.size * 6)
            .build_cartesian_2d(-0.5f64..6.5f64, -0.5f64..1.5f64)?;

        let weekdays = WeekdayTotals::weekday_labels();
        // Rows are drawn bottom-up, so the y labels are reversed.
        let rows: Vec<&str> = HEATMAP_ROW_LABELS.iter().rev().copied().collect();

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(weekdays.len())
            .y_labels(rows.len())
            .x_label_formatter(&|x| Self::tick_label(*x, &weekdays))
            .y_label_formatter(&|y| Self::tick_label(*y, &rows))
            .label_style(axis_font)
            .draw()?;

        chart.draw_series(totals.cells().map(|(row, column, value)| {
            let (x, y) = Self::cell_centre(row, column);
            let color = viridis(normalize(value, min, max));
            Rectangle::new([(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)], color.filled())
        }))?;

        let value_font = TextStyle::from((style.label_font.family.as_str(), style.label_font.size * 2).into_font())
            .pos(Pos::new(HPos::Center, VPos::Center));
        let dark_text = value_font.color(&BLACK);
        let light_text = value_font.color(&WHITE);

        chart.draw_series(totals.cells().map(|(row, column, value)| {
            let cell_color = viridis(normalize(value, min, max));
            let text_style = if contrast_text_color(cell_color) == BLACK {
                dark_text.clone()
            } else {
                light_text.clone()
            };
            Text::new(value.to_string(), Self::cell_centre(row, column), text_style)
        }))?;

        root.present()?;

        debug!(min, max, "drew weekday heatmap");
        info!(path = %path.display(), "rendered {}", self.name());
        Ok(())
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn name(&self) -> &'static str {
        "weekday_heatmap"
    }
}
