//! Cart quote command.

use domain::{Adjustments, Currency, ProductId, ShoppingCart};

use crate::dataset::Dataset;
use crate::error::Result;

/// Parses a `PRODUCT_ID:QUANTITY` pair.
pub fn parse_item(raw: &str) -> std::result::Result<(ProductId, u32), String> {
    let (id, quantity) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected PRODUCT_ID:QUANTITY, got `{raw}`"))?;
    let id: i64 = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid product id `{id}`"))?;
    let quantity: u32 = quantity
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity `{quantity}`"))?;
    Ok((ProductId::new(id), quantity))
}

/// Builds a cart from `items` and renders its lines, subtotal and total.
///
/// Repeated product ids accumulate into one line.
pub fn quote(
    dataset: &Dataset,
    items: &[(ProductId, u32)],
    adjustments: Adjustments,
    currency: &Currency,
) -> Result<String> {
    adjustments.validate()?;

    let mut cart = ShoppingCart::new();
    for &(product_id, quantity) in items {
        let product = dataset.product(product_id)?;
        cart.add_item(product, quantity)?;
    }

    let summary = cart.to_summary();
    let mut lines: Vec<String> = summary
        .items
        .iter()
        .map(|line| {
            format!(
                "{} x{} @ {} = {}",
                line.name,
                line.quantity,
                line.price.format(currency),
                line.line_total.format(currency)
            )
        })
        .collect();
    lines.push(format!("items: {}", summary.item_count));
    lines.push(format!("subtotal: {}", summary.subtotal.format(currency)));
    lines.push(format!("total: {}", cart.total(adjustments)?.format(currency)));

    tracing::info!(
        lines = cart.line_count(),
        items = summary.item_count,
        "quote computed"
    );
    Ok(lines.join("\n"))
}
