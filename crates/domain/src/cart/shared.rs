//! Thread-safe handle for carts that must be shared.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use common::ProductId;

use crate::entities::Product;
use crate::error::DomainError;
use crate::value_objects::Money;

use super::aggregate::{Adjustments, ShoppingCart};
use super::summary::CartSummary;

/// A shopping cart behind a single mutex.
///
/// Every operation holds the lock for its whole read-compute-write cycle.
/// Clones share the same cart.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    inner: Arc<Mutex<ShoppingCart>>,
}

impl SharedCart {
    /// Creates a shared, empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing cart.
    pub fn from_cart(cart: ShoppingCart) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cart)),
        }
    }

    // A panic inside a critical section cannot leave the cart half-updated:
    // every mutation validates before it writes. Recovering the guard is safe.
    fn lock(&self) -> MutexGuard<'_, ShoppingCart> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access, for compound operations that must
    /// not interleave with other callers.
    pub fn with<R>(&self, f: impl FnOnce(&mut ShoppingCart) -> R) -> R {
        f(&mut *self.lock())
    }

    /// See [`ShoppingCart::add_item`].
    pub fn add_item(&self, product: &Product, quantity: u32) -> Result<(), DomainError> {
        self.lock().add_item(product, quantity)
    }

    /// See [`ShoppingCart::remove_item`].
    pub fn remove_item(&self, product_id: ProductId) -> bool {
        self.lock().remove_item(product_id)
    }

    /// See [`ShoppingCart::update_quantity`].
    pub fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<bool, DomainError> {
        self.lock().update_quantity(product_id, quantity)
    }

    /// See [`ShoppingCart::subtotal`].
    pub fn subtotal(&self) -> Money {
        self.lock().subtotal()
    }

    /// See [`ShoppingCart::total`].
    pub fn total(&self, adjustments: Adjustments) -> Result<Money, DomainError> {
        self.lock().total(adjustments)
    }

    /// See [`ShoppingCart::to_summary`].
    pub fn to_summary(&self) -> CartSummary {
        self.lock().to_summary()
    }

    /// Returns a copy of the current cart.
    pub fn snapshot(&self) -> ShoppingCart {
        self.lock().clone()
    }
}
