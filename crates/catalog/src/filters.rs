//! Filtering, grouping and ranking over caller-supplied collections.
//!
//! Every function borrows its input and returns a freshly allocated
//! result; inputs are never mutated and input order is preserved unless a
//! function says otherwise.

use domain::{Product, User};
use indexmap::IndexMap;

/// Returns the active users, in input order.
pub fn filter_active(users: &[User]) -> Vec<&User> {
    users.iter().filter(|user| user.is_active).collect()
}

/// Returns the products with stock on hand, in input order.
pub fn in_stock(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|product| product.stock > 0).collect()
}

/// Partitions products by category.
///
/// Categories appear in order of first occurrence; products keep their
/// relative input order within each category.
pub fn group_by_category(products: &[Product]) -> IndexMap<String, Vec<&Product>> {
    let mut groups: IndexMap<String, Vec<&Product>> = IndexMap::new();
    for product in products {
        groups
            .entry(product.category.clone())
            .or_default()
            .push(product);
    }
    groups
}

/// Returns the `n` highest-priced products, most expensive first.
///
/// Equal prices keep their input order. Asking for more products than
/// exist returns all of them; `n == 0` returns none.
pub fn top_by_price(products: &[Product], n: usize) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by(|a, b| b.price.cmp(&a.price));
    ranked.truncate(n);
    ranked
}
