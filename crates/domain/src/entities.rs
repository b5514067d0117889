//! Domain entities: plain value records with no behaviour beyond field
//! access and equality.
//!
//! Construction does not validate. Entities may come from untrusted input,
//! so the operations that consume them check what they rely on.

use common::{OrderId, ProductId, UserId};
use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;
use crate::value_objects::Money;

/// Role given to users created without an explicit one.
pub const DEFAULT_ROLE: &str = "user";

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: Timestamp,
    pub is_active: bool,
    pub role: String,
}

impl User {
    /// Creates an active user with the default role.
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            created_at,
            is_active: true,
            role: DEFAULT_ROLE.to_string(),
        }
    }

    /// Returns the same user with a different role.
    pub fn with_role(self, role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            ..self
        }
    }

    /// Returns the same user marked inactive.
    pub fn deactivated(self) -> Self {
        Self {
            is_active: false,
            ..self
        }
    }
}

/// A product in the store catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Creates a product with no stock and no tags.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            stock: 0,
            tags: Vec::new(),
        }
    }

    /// Returns the same product with the given stock level.
    pub fn with_stock(self, stock: u32) -> Self {
        Self { stock, ..self }
    }

    /// Returns the same product with the given tags, in order.
    pub fn with_tags<I, T>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            ..self
        }
    }
}

/// One product line of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A completed customer order.
///
/// `total` is fixed when the order is placed and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub products: Vec<OrderLine>,
    pub total: Money,
    pub status: String,
    pub created_at: Timestamp,
}
