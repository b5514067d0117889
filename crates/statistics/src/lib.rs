//! Order statistics.
//!
//! Summaries are computed on demand from a slice of completed orders:
//! - [`summarize`] for one user
//! - [`summarize_all`] for every user that appears in the slice
//! - [`top_customers`] ranking users by total spent

pub mod summary;

pub use summary::{OrderStatistics, summarize, summarize_all, top_customers};
