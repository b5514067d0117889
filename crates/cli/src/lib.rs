//! Command-line front end over the shop core.
//!
//! Loads a JSON dataset of users, products and orders and runs catalog
//! queries, order statistics, cart quotes and codec round trips against
//! it. Each command renders its output to a `String` so the binary only
//! has to print it.

pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;

pub use config::{Config, LogFormat};
pub use dataset::Dataset;
pub use error::{CliError, Result};
