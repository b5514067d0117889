//! Per-user order summaries.

use domain::{DomainError, Money, Order, Timestamp, UserId};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

/// Order statistics for one user.
///
/// `first_order` and `last_order` are `None` exactly when the user has no
/// orders, and are left out of the serialized form in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderStatistics {
    pub total_orders: u64,
    pub total_spent: Money,
    /// `total_spent / total_orders`, unrounded; zero when there are no
    /// orders.
    pub average_order: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_order: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_order: Option<Timestamp>,
}

impl OrderStatistics {
    /// Statistics for a user with no orders.
    pub fn empty() -> Self {
        Self {
            total_orders: 0,
            total_spent: Money::zero(),
            average_order: Money::zero(),
            first_order: None,
            last_order: None,
        }
    }

    /// Returns true if no orders contributed to these statistics.
    pub fn is_empty(&self) -> bool {
        self.total_orders == 0
    }

    fn from_orders<'a>(
        orders: impl IntoIterator<Item = &'a Order>,
    ) -> Result<Self, DomainError> {
        let mut stats = Self::empty();

        for order in orders {
            stats.total_orders += 1;
            stats.total_spent =
                stats
                    .total_spent
                    .checked_add(order.total)
                    .ok_or(DomainError::AmountOverflow {
                        context: "total spent",
                    })?;

            // Strict comparisons: on equal instants the earliest order in
            // input wins for both ends.
            let created = order.created_at;
            if stats
                .first_order
                .is_none_or(|first| created.instant() < first.instant())
            {
                stats.first_order = Some(created);
            }
            if stats
                .last_order
                .is_none_or(|last| created.instant() > last.instant())
            {
                stats.last_order = Some(created);
            }
        }

        if stats.total_orders > 0 {
            stats.average_order =
                Money::new(stats.total_spent.amount() / Decimal::from(stats.total_orders));
        }
        Ok(stats)
    }
}

impl Default for OrderStatistics {
    fn default() -> Self {
        Self::empty()
    }
}

/// Summarizes the orders placed by `user_id`.
///
/// A user with no orders gets [`OrderStatistics::empty`]; no division is
/// performed in that case. Fails only if the summed totals leave the
/// decimal range.
#[tracing::instrument(skip(orders), fields(order_count = orders.len()))]
pub fn summarize(user_id: UserId, orders: &[Order]) -> Result<OrderStatistics, DomainError> {
    let stats =
        OrderStatistics::from_orders(orders.iter().filter(|order| order.user_id == user_id))?;
    tracing::debug!(total_orders = stats.total_orders, "user orders summarized");
    Ok(stats)
}

/// Summarizes every user that owns at least one order, in order of each
/// user's first appearance.
pub fn summarize_all(orders: &[Order]) -> Result<IndexMap<UserId, OrderStatistics>, DomainError> {
    let mut by_user: IndexMap<UserId, Vec<&Order>> = IndexMap::new();
    for order in orders {
        by_user.entry(order.user_id).or_default().push(order);
    }

    by_user
        .into_iter()
        .map(|(user_id, user_orders)| {
            OrderStatistics::from_orders(user_orders).map(|stats| (user_id, stats))
        })
        .collect()
}

/// Returns up to `limit` users ranked by total spent, highest first.
///
/// Users with equal spend keep their order of first appearance.
pub fn top_customers(
    orders: &[Order],
    limit: usize,
) -> Result<Vec<(UserId, OrderStatistics)>, DomainError> {
    let mut ranked: Vec<(UserId, OrderStatistics)> = summarize_all(orders)?.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_spent.cmp(&a.1.total_spent));
    ranked.truncate(limit);
    Ok(ranked)
}
