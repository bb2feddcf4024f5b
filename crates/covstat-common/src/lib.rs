//! # Covstat Common
//!
//! Shared types, error handling, and logging for covstat.
//!
//! This crate provides the data model that flows through every pipeline
//! stage (raw rows, validated rows, records) together with the error
//! taxonomy used across the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::*;
pub use types::*;
pub use utils::*;
