//! # Covstat Config
//!
//! Type-safe configuration for covstat: the dashboard endpoint, the
//! statistics API query, chart output settings, and logging.
//!
//! Values are read from YAML, overridden from the environment, and
//! validated before any network access happens.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use schema::*;
