//! Domain layer for the shop core.
//!
//! This crate provides:
//! - Entities: [`User`], [`Product`], [`Order`]
//! - Value objects: [`Money`], [`Currency`], [`Timestamp`]
//! - The [`ShoppingCart`] aggregate and its thread-safe [`SharedCart`] handle
//!
//! Everything here is synchronous and free of I/O.

pub mod cart;
pub mod entities;
pub mod error;
pub mod timestamp;
pub mod value_objects;

pub use cart::{Adjustments, CartLine, CartLineSummary, CartSummary, SharedCart, ShoppingCart};
pub use common::{OrderId, ProductId, UserId};
pub use entities::{DEFAULT_ROLE, Order, OrderLine, Product, User};
pub use error::DomainError;
pub use timestamp::{ParseTimestampError, Timestamp};
pub use value_objects::{Currency, Money, apply_discount};
