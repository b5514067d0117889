//! Integration tests: statistics over an order history shared by several
//! users.

use domain::{Money, Order, OrderId, OrderLine, ProductId, Timestamp, UserId};
use statistics::{OrderStatistics, summarize, summarize_all, top_customers};

fn order(id: i64, user: i64, cents: i64, created: &str) -> Order {
    Order {
        id: OrderId::new(id),
        user_id: UserId::new(user),
        products: vec![OrderLine {
            product_id: ProductId::new(1),
            quantity: 1,
        }],
        total: Money::from_cents(cents),
        status: "delivered".to_string(),
        created_at: Timestamp::parse(created).unwrap(),
    }
}

fn history() -> Vec<Order> {
    vec![
        order(1, 42, 3000, "2024-01-01T09:00:00"),
        order(2, 7, 1250, "2024-01-01T11:00:00"),
        order(3, 42, 7000, "2024-01-02T09:00:00"),
        order(4, 7, 1250, "2024-01-05T18:30:00"),
        order(5, 9, 99999, "2024-02-01T00:00:00"),
    ]
}

#[test]
fn summary_for_user_with_two_orders() {
    let orders = history();
    let stats = summarize(UserId::new(42), &orders).unwrap();

    assert_eq!(stats.total_orders, 2);
    assert_eq!(stats.total_spent, Money::from_cents(10000));
    assert_eq!(stats.average_order, Money::from_cents(5000));
    assert_eq!(
        stats.first_order,
        Some(Timestamp::parse("2024-01-01T09:00:00").unwrap())
    );
    assert_eq!(
        stats.last_order,
        Some(Timestamp::parse("2024-01-02T09:00:00").unwrap())
    );
}

#[test]
fn summary_for_empty_history_has_no_dates() {
    let stats = summarize(UserId::new(42), &[]).unwrap();
    assert_eq!(stats.total_orders, 0);
    assert!(stats.total_spent.is_zero());
    assert!(stats.average_order.is_zero());
    assert!(stats.first_order.is_none());
    assert!(stats.last_order.is_none());

    let json = serde_json::to_string(&stats).unwrap();
    assert_eq!(
        json,
        r#"{"total_orders":0,"total_spent":"0","average_order":"0"}"#
    );
}

#[test]
fn summary_json_includes_dates_when_present() {
    let orders = history();
    let json = serde_json::to_value(summarize(UserId::new(7), &orders).unwrap()).unwrap();

    assert_eq!(json["total_orders"], 2);
    assert_eq!(json["total_spent"], "25.00");
    assert_eq!(json["first_order"], "2024-01-01T11:00:00");
    assert_eq!(json["last_order"], "2024-01-05T18:30:00");
}

#[test]
fn per_user_summaries_agree_with_single_summaries() {
    let orders = history();
    let all = summarize_all(&orders).unwrap();

    assert_eq!(all.len(), 3);
    for (user_id, stats) in &all {
        assert_eq!(stats, &summarize(*user_id, &orders).unwrap());
    }
    let spent: Money = all.values().map(|s| s.total_spent).sum();
    let expected: Money = orders.iter().map(|o| o.total).sum();
    assert_eq!(spent, expected);
}

#[test]
fn top_customers_limits_and_ranks() {
    let orders = history();
    let top = top_customers(&orders, 2).unwrap();

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].0, UserId::new(9));
    assert_eq!(top[1].0, UserId::new(42));
    assert!(top_customers(&orders, 0).unwrap().is_empty());
    assert!(top_customers(&[], 5).unwrap().is_empty());
    assert_eq!(OrderStatistics::default(), OrderStatistics::empty());
}
