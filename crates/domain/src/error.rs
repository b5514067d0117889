//! Domain error types.

use common::ProductId;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::value_objects::Money;

/// Errors raised when a domain operation receives an invalid argument.
///
/// Every check happens before any state change, so a failed call leaves
/// the aggregate exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Quantity must be positive.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Adding the quantity would overflow the line's counter.
    #[error("Quantity overflow for product {product_id}: {current} + {added}")]
    QuantityOverflow {
        product_id: ProductId,
        current: u32,
        added: u32,
    },

    /// Prices must not be negative.
    #[error("Invalid price for product {product_id}: {price} (must not be negative)")]
    InvalidPrice { product_id: ProductId, price: Money },

    /// A percentage was outside its allowed range.
    #[error("Invalid {name}: {value}% (out of range)")]
    InvalidPercentage { name: &'static str, value: Decimal },

    /// A money amount would leave the representable decimal range.
    #[error("Amount overflow computing {context}")]
    AmountOverflow { context: &'static str },
}
