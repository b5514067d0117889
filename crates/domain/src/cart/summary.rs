//! Read-only cart snapshots for display and serialization.

use common::ProductId;
use serde::Serialize;

use crate::value_objects::Money;

/// One line of a [`CartSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineSummary {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

/// Cart contents at the moment the summary was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub items: Vec<CartLineSummary>,
    pub subtotal: Money,
    pub item_count: u64,
}
