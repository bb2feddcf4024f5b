//! Grouped staff/student bar chart.

use crate::{parse_color, BarSeries, ChartRenderer, ChartStyle};
use covstat_common::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::{debug, info};

/// Width of one bar in date units; a pair fills most of the slot.
const BAR_WIDTH: f64 = 0.4;

/// Headroom above the tallest bar for its value label.
const Y_PADDING: f64 = 1.15;

/// Characters in an ISO date tick label.
const DATE_LABEL_CHARS: u32 = 10;

/// One staff bar and one student bar per date, side by side.
#[derive(Debug, Clone)]
pub struct StaffStudentChart {
    title: String,
    x_label: String,
    y_label: String,
}

impl Default for StaffStudentChart {
    fn default() -> Self {
        Self {
            title: "Number of cases in staff and student populations".to_string(),
            x_label: "Date".to_string(),
            y_label: "Cases".to_string(),
        }
    }
}

impl StaffStudentChart {
    /// Chart with the standard title and axis descriptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Axis descriptions as `(x, y)`.
    pub fn axis_labels(&self) -> (&str, &str) {
        (&self.x_label, &self.y_label)
    }

    /// Right margin wide enough for half of the last date label, which is
    /// centred on the final slot.
    fn right_margin(style: &ChartStyle) -> u32 {
        style.margin + style.axis_font.size * DATE_LABEL_CHARS / 3
    }

    /// Every `step`-th date gets an x-axis label so the labels don't collide.
    fn label_step(series: &BarSeries) -> usize {
        series.len().div_ceil(15).max(1)
    }
}

impl ChartRenderer for StaffStudentChart {
    type Data = BarSeries;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render_to_file(&self, series: &BarSeries, style: &ChartStyle, path: &Path) -> Result<()> {
        let staff_color = parse_color(&style.staff_color)?;
        let student_color = parse_color(&style.student_color)?;
        let background = parse_color(&style.background_color)?;

        let root = BitMapBackend::new(path, style.dimensions()).into_drawing_area();
        root.fill(&background)?;

        let slots = series.len().max(1) as f64;
        let y_min = series.min_value().min(0) as f64;
        let y_max = (series.max_value().max(1) as f64) * Y_PADDING;

        let title_font = (style.title_font.family.as_str(), style.title_font.size);
        let axis_font = (style.axis_font.family.as_str(), style.axis_font.size);
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, title_font)
            .margin(style.margin)
            .margin_right(Self::right_margin(style))
            .x_label_area_size(style.axis_font.size * 4)
            .y_label_area_size(style.axis_font.size * 4)
            .build_cartesian_2d(-0.5..slots - 0.5, y_min..y_max)?;

        let step = Self::label_step(series);
        let date_label = |x: &f64| {
            let nearest = x.round();
            if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
                return String::new();
            }
            let index = nearest as usize;
            if index % step == 0 {
                series.labels.get(index).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(series.len().max(1))
            .x_label_formatter(&date_label)
            .y_label_formatter(&|y| format!("{y:.0}"))
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .label_style(axis_font)
            .axis_desc_style(axis_font)
            .draw()?;

        let bars = [
            ("Staff", &series.staff, staff_color, -BAR_WIDTH),
            ("Students", &series.students, student_color, 0.0),
        ];
        let value_font = TextStyle::from((style.label_font.family.as_str(), style.label_font.size).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        for (name, values, color, offset) in bars {
            chart
                .draw_series(values.iter().enumerate().map(|(i, value)| {
                    let left = i as f64 + offset;
                    Rectangle::new([(left, 0.0), (left + BAR_WIDTH, *value as f64)], color.filled())
                }))?
                .label(name)
                .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled()));

            chart.draw_series(values.iter().enumerate().map(|(i, value)| {
                let centre = i as f64 + offset + BAR_WIDTH / 2.0;
                EmptyElement::at((centre, *value as f64))
                    + Text::new(value.to_string(), (0, -4), value_font.clone())
            }))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(axis_font)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;

        debug!(dates = series.len(), step, "drew staff/student bars");
        info!(path = %path.display(), "rendered {}", self.name());
        Ok(())
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn name(&self) -> &'static str {
        "staff_student_bar_chart"
    }
}
