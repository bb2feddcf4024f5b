//! # Covstat Ingest
//!
//! Turns the published dashboard page into typed records.
//!
//! Each stage is a separate, independently testable function:
//! [`fetch`] (network, the only side effect), [`extract`],
//! [`validate`](validate::validate), and [`transform`](transform::transform)
//! or [`heat_transform`](transform::heat_transform).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod date;
pub mod extract;
pub mod fetch;
pub mod stats_api;
pub mod transform;
pub mod validate;

pub use date::DateParser;
pub use extract::extract;
pub use fetch::{parse_document, Fetcher};
pub use scraper::Html;
pub use stats_api::StatsApiClient;
pub use transform::{heat_transform, heat_transform_with, transform, transform_with};
pub use validate::validate;
