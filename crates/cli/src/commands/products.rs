//! Catalog listing commands.

use catalog::ProductSearch;
use domain::{Currency, Product};

use crate::dataset::Dataset;

fn product_line(product: &Product, currency: &Currency) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        product.id,
        product.name,
        product.price.format(currency),
        product.category
    )
}

fn render(products: &[&Product], currency: &Currency) -> String {
    products
        .iter()
        .map(|product| product_line(product, currency))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Each category followed by its product names, in first-seen order.
pub fn categories(dataset: &Dataset) -> String {
    catalog::group_by_category(&dataset.products)
        .iter()
        .map(|(category, products)| {
            let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
            format!("{category}: {}", names.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The `n` most expensive products.
pub fn top(dataset: &Dataset, n: usize, currency: &Currency) -> String {
    render(&catalog::top_by_price(&dataset.products, n), currency)
}

/// Products matching `criteria`.
pub fn search(dataset: &Dataset, criteria: &ProductSearch, currency: &Currency) -> String {
    render(&catalog::search(&dataset.products, criteria), currency)
}
