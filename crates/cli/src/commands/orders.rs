//! Order statistics command.

use domain::UserId;

use crate::dataset::Dataset;
use crate::error::Result;

/// Order statistics for `user_id` as pretty-printed JSON.
///
/// A user without orders gets the empty summary, whether or not the user
/// exists in the dataset.
pub fn stats(dataset: &Dataset, user_id: UserId) -> Result<String> {
    let summary = statistics::summarize(user_id, &dataset.orders)?;
    Ok(serde_json::to_string_pretty(&summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::Value;

    fn dataset() -> Dataset {
        Dataset::from_json(
            r#"{"orders": [
                {"id": 1, "user_id": 7, "products": [], "total": "10.00",
                 "status": "completed", "created_at": "2024-01-05T10:00:00"},
                {"id": 2, "user_id": 7, "products": [], "total": "30.00",
                 "status": "completed", "created_at": "2024-01-01T10:00:00"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_stats_for_user() {
        let value: Value = serde_json::from_str(&stats(&dataset(), UserId::new(7)).unwrap()).unwrap();
        assert_eq!(value["total_orders"], 2);
        assert_eq!(value["total_spent"], "40.00");
        let average: Decimal = value["average_order"].as_str().unwrap().parse().unwrap();
        assert_eq!(average, Decimal::from(20));
        assert_eq!(value["first_order"], "2024-01-01T10:00:00");
        assert_eq!(value["last_order"], "2024-01-05T10:00:00");
    }

    #[test]
    fn test_stats_without_orders() {
        let value: Value = serde_json::from_str(&stats(&dataset(), UserId::new(1)).unwrap()).unwrap();
        assert_eq!(value["total_orders"], 0);
        assert!(value.get("first_order").is_none());
    }
}
