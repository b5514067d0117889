//! Shopping cart aggregate and related types.

mod aggregate;
mod shared;
mod summary;

pub use aggregate::{Adjustments, CartLine, ShoppingCart};
pub use shared::SharedCart;
pub use summary::{CartLineSummary, CartSummary};
