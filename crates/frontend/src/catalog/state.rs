use crate::catalog::filters::ProductFilters;
use contracts::catalog::Product;
use leptos::prelude::*;

/// The four mutable slots of the catalog browser. Everything shown on the
/// page is derived from this container by pure functions.
#[derive(Clone, Debug)]
pub struct CatalogState {
    // Raw data, filled once by the two fetches
    pub products: Vec<Product>,
    pub categories: Vec<String>,

    // Filters
    pub filters: ProductFilters,

    // Pagination (zero-based page index, clamped on derivation)
    pub page: usize,

    // Load flag
    pub is_loaded: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            filters: ProductFilters::default(),
            page: 0,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<CatalogState> {
    RwSignal::new(CatalogState::default())
}
