//! Pure filter derivation over the fetched product list.
//!
//! All predicates are conjunctive and order-preserving; an inactive filter
//! field passes every product through.

use contracts::catalog::Product;

/// Category selector value: the "all" sentinel or a single category label
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse the value of the category `<select>` control
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category,
        }
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

/// User-selected filter criteria
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    pub category: CategoryFilter,

    /// Price floor; `None` means the filter is inactive
    pub min_price: Option<f64>,

    /// Price ceiling; `None` means the filter is inactive
    pub max_price: Option<f64>,

    /// Case-insensitive substring match on the title; blank means inactive
    pub search: String,
}

impl ProductFilters {
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product) {
            return false;
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        let search = self.search.trim();
        if !search.is_empty()
            && !product
                .title
                .to_lowercase()
                .contains(&search.to_lowercase())
        {
            return false;
        }
        true
    }

    /// Number of non-default filter fields, for the filter panel badge
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.category != CategoryFilter::All {
            count += 1;
        }
        if self.min_price.is_some() {
            count += 1;
        }
        if self.max_price.is_some() {
            count += 1;
        }
        if !self.search.trim().is_empty() {
            count += 1;
        }
        count
    }
}

/// Parse a price input field. Empty, malformed or negative input degrades
/// to `None` (filter inactive) instead of erroring.
pub fn parse_price(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

/// Derive the filtered view of the product list.
///
/// The result is an order-preserving subsequence of `products`.
pub fn apply(products: &[Product], filters: &ProductFilters) -> Vec<Product> {
    products
        .iter()
        .filter(|product| filters.matches(product))
        .cloned()
        .collect()
}
