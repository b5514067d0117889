use domain::{Money, Product};

/// Builder for product searches.
///
/// Every filter is optional. Set filters are combined with AND and applied
/// in a fixed order: text, category, minimum price, maximum price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSearch {
    /// Case-insensitive substring matched against the name and every tag.
    pub query: String,

    /// Exact, case-sensitive category.
    pub category: Option<String>,

    /// Minimum price (inclusive).
    pub min_price: Option<Money>,

    /// Maximum price (inclusive).
    pub max_price: Option<Money>,
}

impl ProductSearch {
    /// Creates a search for the given text. An empty string matches
    /// everything.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// A search with no filters at all.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filters by exact category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filters to products priced at or above `price`.
    pub fn min_price(mut self, price: Money) -> Self {
        self.min_price = Some(price);
        self
    }

    /// Filters to products priced at or below `price`.
    pub fn max_price(mut self, price: Money) -> Self {
        self.max_price = Some(price);
        self
    }

    /// Returns true if `product` passes every set filter.
    ///
    /// `needle` is the query already lowercased, or `None` when the query
    /// is empty.
    fn matches(&self, product: &Product, needle: Option<&str>) -> bool {
        if let Some(needle) = needle
            && !text_matches(product, needle)
        {
            return false;
        }
        // An empty category string means no category filter.
        if let Some(category) = self.category.as_deref()
            && !category.is_empty()
            && product.category != category
        {
            return false;
        }
        if let Some(min) = self.min_price
            && product.price < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price > max
        {
            return false;
        }
        true
    }
}

fn text_matches(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Returns the products that pass `criteria`, in input order.
///
/// Inconsistent bounds such as `min_price > max_price` are not rejected;
/// they simply match nothing.
#[tracing::instrument(skip(products), fields(candidates = products.len()))]
pub fn search<'a>(products: &'a [Product], criteria: &ProductSearch) -> Vec<&'a Product> {
    metrics::counter!("catalog_searches_total").increment(1);

    let needle = (!criteria.query.is_empty()).then(|| criteria.query.to_lowercase());
    let results: Vec<&Product> = products
        .iter()
        .filter(|product| criteria.matches(product, needle.as_deref()))
        .collect();

    tracing::debug!(matched = results.len(), "product search complete");
    results
}
