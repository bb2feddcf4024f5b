//! # Covstat Graphs
//!
//! Aggregation and rendering for the case reports.
//!
//! Aggregation ([`BarSeries`], [`WeekdayTotals`]) is pure. Rendering sits
//! behind [`ChartRenderer`] and only ever sees pre-computed aggregates.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod aggregate;
pub mod bar_chart;
pub mod heatmap;
pub mod manager;
pub mod traits;
pub mod types;
pub mod utils;

pub use aggregate::*;
pub use bar_chart::StaffStudentChart;
pub use heatmap::WeekdayHeatmap;
pub use manager::ReportManager;
pub use traits::*;
pub use types::*;
pub use utils::*;
