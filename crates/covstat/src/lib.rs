//! # Covstat
//!
//! Scrapes the university COVID-19 statistics dashboard, prints the
//! parsed records, renders the staff/student bar chart and the weekday
//! heatmap, and optionally exports the records as CSV or JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod export;
pub mod pipeline;

pub use cli::{Args, Command};
pub use pipeline::{run, run_pipeline, run_stats, PipelineOutput};
