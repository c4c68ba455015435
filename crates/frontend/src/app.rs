use crate::catalog::ui::CatalogPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <CatalogPage />
    }
}
