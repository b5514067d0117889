use serde::{Deserialize, Serialize};

/// Declares an integer-backed identifier newtype.
///
/// Each identifier is a distinct type so a product id can never be passed
/// where a user id is expected.
macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from its raw value.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

integer_id! {
    /// Unique identifier for a user.
    UserId
}

integer_id! {
    /// Unique identifier for a catalog product.
    ProductId
}

integer_id! {
    /// Unique identifier for a placed order.
    OrderId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_preserves_raw_value() {
        assert_eq!(UserId::new(42).get(), 42);
        assert_eq!(i64::from(ProductId::from(7)), 7);
    }

    #[test]
    fn id_display_is_bare_number() {
        assert_eq!(OrderId::new(1001).to_string(), "1001");
    }

    #[test]
    fn id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&ProductId::new(5)).unwrap();
        assert_eq!(json, "5");

        let id: UserId = serde_json::from_str("12").unwrap();
        assert_eq!(id, UserId::new(12));
    }
}
