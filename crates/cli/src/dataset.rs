//! Dataset loading.

use std::path::Path;

use domain::{Order, Product, ProductId, User, UserId};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{CliError, Result};

/// Raw file shape; users go through the user codec so they share its
/// defaults and timestamp handling.
#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    users: Vec<Value>,
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    orders: Vec<Order>,
}

/// In-memory collections the commands run against.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

impl Dataset {
    /// Reads and parses the dataset at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            users = dataset.users.len(),
            products = dataset.products.len(),
            orders = dataset.orders.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Parses a dataset from JSON text. Missing collections are empty.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(text)?;
        let users = raw
            .users
            .into_iter()
            .map(codec::decode_user_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            users,
            products: raw.products,
            orders: raw.orders,
        })
    }

    /// Looks up a user by id.
    pub fn user(&self, id: UserId) -> Result<&User> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or(CliError::UnknownUser(id))
    }

    /// Looks up a product by id.
    pub fn product(&self, id: ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or(CliError::UnknownProduct(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Money;

    const SAMPLE: &str = r#"{
        "users": [
            {"id": 1, "username": "alice", "email": "alice@example.com",
             "created_at": "2024-01-01T00:00:00"},
            {"id": 2, "username": "bob", "email": "bob@example.com",
             "created_at": "2024-02-01T09:30:00+02:00", "is_active": false}
        ],
        "products": [
            {"id": 10, "name": "Mug", "price": "12.50", "category": "kitchen", "stock": 3}
        ],
        "orders": [
            {"id": 100, "user_id": 1, "products": [{"product_id": 10, "quantity": 2}],
             "total": "25.00", "status": "completed", "created_at": "2024-03-01T12:00:00"}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        assert_eq!(dataset.users.len(), 2);
        assert!(dataset.users[0].is_active);
        assert!(!dataset.users[1].is_active);
        assert_eq!(dataset.products[0].price, Money::from_cents(1250));
        assert_eq!(dataset.orders[0].total, Money::from_cents(2500));
    }

    #[test]
    fn test_missing_collections_are_empty() {
        let dataset = Dataset::from_json("{}").unwrap();
        assert!(dataset.users.is_empty());
        assert!(dataset.products.is_empty());
        assert!(dataset.orders.is_empty());
    }

    #[test]
    fn test_bad_user_record_is_reported() {
        let result = Dataset::from_json(r#"{"users": [{"id": 1}]}"#);
        assert!(matches!(result, Err(CliError::Decode(_))));
    }

    #[test]
    fn test_lookups() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        assert_eq!(dataset.user(UserId::new(2)).unwrap().username, "bob");
        assert!(matches!(
            dataset.product(ProductId::new(99)),
            Err(CliError::UnknownProduct(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dataset::load(Path::new("/nonexistent/shop.json"));
        assert!(matches!(result, Err(CliError::Io { .. })));
    }
}
