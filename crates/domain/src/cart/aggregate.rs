//! Shopping cart aggregate.

use common::ProductId;
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::entities::Product;
use crate::error::DomainError;
use crate::value_objects::Money;

use super::summary::{CartLineSummary, CartSummary};

/// Tax and discount applied when totalling a cart, both in percent.
///
/// Defaults to no tax and no discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adjustments {
    pub tax_rate_percent: Decimal,
    pub discount_percent: Decimal,
}

impl Adjustments {
    /// No tax, no discount.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the tax rate.
    pub fn tax(mut self, percent: Decimal) -> Self {
        self.tax_rate_percent = percent;
        self
    }

    /// Sets the discount.
    pub fn discount(mut self, percent: Decimal) -> Self {
        self.discount_percent = percent;
        self
    }

    /// Checks that the tax rate is not negative and the discount lies in
    /// `0..=100`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tax_rate_percent < Decimal::ZERO {
            return Err(DomainError::InvalidPercentage {
                name: "tax",
                value: self.tax_rate_percent,
            });
        }
        if self.discount_percent < Decimal::ZERO || self.discount_percent > Decimal::ONE_HUNDRED {
            return Err(DomainError::InvalidPercentage {
                name: "discount",
                value: self.discount_percent,
            });
        }
        Ok(())
    }
}

/// A product snapshot and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    /// The product as it was when the line was created.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Units of the product in the cart; always greater than zero.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price taken from the snapshot.
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// `unit_price × quantity`, unrounded.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

/// Shopping cart holding product snapshots and quantities.
///
/// Each line owns its own copy of the product, so later catalog changes
/// never reprice an existing line. Snapshot and quantity live in the same
/// entry, which keeps their key sets identical by construction. Lines
/// iterate in the order they were first added.
///
/// Every line total and the subtotal are kept within the decimal range:
/// mutations that would push them past it are rejected up front.
///
/// The cart is a single-owner value: mutation needs `&mut self`. Use
/// [`super::SharedCart`] when a cart must be shared between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingCart {
    lines: IndexMap<ProductId, CartLine>,
}

// Query methods
impl ShoppingCart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.values().map(|line| u64::from(line.quantity)).sum()
    }

    /// Returns all lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Returns `(product id, quantity)` pairs in insertion order.
    pub fn quantities(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.lines.iter().map(|(id, line)| (*id, line.quantity))
    }

    /// Returns `(product id, snapshot)` pairs in insertion order.
    pub fn snapshots(&self) -> impl Iterator<Item = (ProductId, &Product)> {
        self.lines.iter().map(|(id, line)| (*id, &line.product))
    }

    /// Returns the quantity for a product, if it is in the cart.
    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.lines.get(&product_id).map(|line| line.quantity)
    }

    /// Returns the stored snapshot for a product, if it is in the cart.
    pub fn snapshot_of(&self, product_id: ProductId) -> Option<&Product> {
        self.lines.get(&product_id).map(|line| &line.product)
    }

    /// Sum of every line total. An empty cart yields zero.
    pub fn subtotal(&self) -> Money {
        self.lines.values().map(CartLine::line_total).sum()
    }

    /// Total after discount and then tax, rounded half-to-even to cents.
    ///
    /// Computed as `subtotal × (1 − discount/100) × (1 + tax/100)`. Fails
    /// if the adjustments are out of range or the taxed amount overflows.
    pub fn total(&self, adjustments: Adjustments) -> Result<Money, DomainError> {
        adjustments.validate()?;
        let discount_factor = Decimal::ONE - adjustments.discount_percent / Decimal::ONE_HUNDRED;
        let tax_factor = Decimal::ONE + adjustments.tax_rate_percent / Decimal::ONE_HUNDRED;

        self.subtotal()
            .checked_scale(discount_factor)
            .and_then(|discounted| discounted.checked_scale(tax_factor))
            .map(|taxed| taxed.round_half_even(2))
            .ok_or(DomainError::AmountOverflow {
                context: "cart total",
            })
    }

    /// Checks that a line for `product_id` priced at `price` with
    /// `quantity` units keeps its line total and the cart subtotal
    /// representable.
    fn check_line(
        &self,
        product_id: ProductId,
        price: Money,
        quantity: u32,
    ) -> Result<(), DomainError> {
        let line_total = price
            .checked_multiply(quantity)
            .ok_or(DomainError::AmountOverflow {
                context: "cart line total",
            })?;

        // Prices are never negative, so partial sums only grow.
        self.lines
            .iter()
            .filter(|(id, _)| **id != product_id)
            .try_fold(line_total, |sum, (_, line)| sum.checked_add(line.line_total()))
            .map(|_| ())
            .ok_or(DomainError::AmountOverflow {
                context: "cart subtotal",
            })
    }

    /// Returns a detached snapshot of the cart for display or serialization.
    pub fn to_summary(&self) -> CartSummary {
        CartSummary {
            items: self
                .lines
                .values()
                .map(|line| CartLineSummary {
                    product_id: line.product.id,
                    name: line.product.name.clone(),
                    price: line.unit_price(),
                    quantity: line.quantity,
                    line_total: line.line_total(),
                })
                .collect(),
            subtotal: self.subtotal(),
            item_count: self.item_count(),
        }
    }
}

// Command methods
impl ShoppingCart {
    /// Adds `quantity` units of a product.
    ///
    /// A product already in the cart has its quantity increased; the
    /// snapshot from the first add stays authoritative for pricing. A new
    /// product is stored as a copy of `product`.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity { quantity });
        }

        let existing = self
            .lines
            .get(&product.id)
            .map(|line| (line.quantity, line.unit_price()));

        match existing {
            Some((current, price)) => {
                let new_quantity =
                    current
                        .checked_add(quantity)
                        .ok_or(DomainError::QuantityOverflow {
                            product_id: product.id,
                            current,
                            added: quantity,
                        })?;
                self.check_line(product.id, price, new_quantity)?;

                if let Some(line) = self.lines.get_mut(&product.id) {
                    line.quantity = new_quantity;
                }
                tracing::debug!(
                    product_id = %product.id,
                    quantity = new_quantity,
                    "cart line incremented"
                );
            }
            None => {
                if product.price.is_negative() {
                    return Err(DomainError::InvalidPrice {
                        product_id: product.id,
                        price: product.price,
                    });
                }
                self.check_line(product.id, product.price, quantity)?;

                self.lines.insert(
                    product.id,
                    CartLine {
                        product: product.clone(),
                        quantity,
                    },
                );
                tracing::debug!(product_id = %product.id, quantity, "cart line added");
            }
        }

        metrics::counter!("cart_items_added_total").increment(u64::from(quantity));
        Ok(())
    }

    /// Removes a product's line. Returns false if it was not in the cart.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        match self.lines.shift_remove(&product_id) {
            Some(line) => {
                tracing::debug!(%product_id, quantity = line.quantity, "cart line removed");
                metrics::counter!("cart_items_removed_total").increment(u64::from(line.quantity));
                true
            }
            None => false,
        }
    }

    /// Sets a line's quantity exactly.
    ///
    /// Returns `Ok(false)` if the product is not in the cart. A quantity of
    /// zero removes the line. Fails without change if the new line total
    /// would overflow.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<bool, DomainError> {
        if quantity == 0 {
            return Ok(self.remove_item(product_id));
        }

        let Some(price) = self.lines.get(&product_id).map(CartLine::unit_price) else {
            return Ok(false);
        };
        self.check_line(product_id, price, quantity)?;

        if let Some(line) = self.lines.get_mut(&product_id) {
            line.quantity = quantity;
        }
        tracing::debug!(%product_id, quantity, "cart line quantity set");
        Ok(true)
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
