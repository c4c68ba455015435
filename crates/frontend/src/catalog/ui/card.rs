use crate::shared::number_format::format_money;
use contracts::catalog::Product;
use leptos::prelude::*;

/// Single product tile in the catalog grid
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <div class="product-card">
            <img
                class="product-card__image"
                src=product.image.clone()
                alt=product.title.clone()
                loading="lazy"
            />
            <h3 class="product-card__title">{product.title.clone()}</h3>
            <p class="product-card__category">"Category: " {product.category.clone()}</p>
            <p class="product-card__price">{format!("Price: ${}", format_money(product.price))}</p>
        </div>
    }
}
