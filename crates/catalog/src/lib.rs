//! Catalog query engine.
//!
//! Pure, side-effect-free queries over in-memory product and user
//! collections:
//! - [`filter_active`], [`in_stock`], [`group_by_category`], [`top_by_price`]
//! - [`search`] driven by a [`ProductSearch`] builder
//!
//! Nothing here validates entity internals or raises errors; an unmatched
//! query is just an empty result.

pub mod filters;
pub mod query;

pub use filters::{filter_active, group_by_category, in_stock, top_by_price};
pub use query::{ProductSearch, search};
