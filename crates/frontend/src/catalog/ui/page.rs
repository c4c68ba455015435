use crate::catalog::api;
use crate::catalog::filters::{self, CategoryFilter};
use crate::catalog::pagination::{self, PAGE_SIZE};
use crate::catalog::state::create_state;
use crate::catalog::ui::ProductCard;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Product catalog browser: fetches the catalog once, filters it on the
/// client and pages through the filtered view.
#[component]
#[allow(non_snake_case)]
pub fn CatalogPage() -> impl IntoView {
    let state = create_state();

    // Two independent fetches issued at mount; each resolves into its own
    // state slot, in whichever order the responses arrive. On failure the
    // slot stays empty and the error goes to the console only.
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_products().await {
            Ok(products) => state.update(|s| {
                s.products = products;
                s.is_loaded = true;
            }),
            Err(e) => log::error!("Error fetching products: {}", e),
        }
    });
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_categories().await {
            Ok(categories) => state.update(|s| s.categories = categories),
            Err(e) => log::error!("Error fetching categories: {}", e),
        }
    });

    // Pull-based derivation chain: raw state -> filtered list -> page view.
    let filtered = Memo::new(move |_| {
        let s = state.get();
        filters::apply(&s.products, &s.filters)
    });
    let total_pages = Memo::new(move |_| pagination::page_count(filtered.get().len(), PAGE_SIZE));
    // The stored page index survives filter changes; clamping here keeps it
    // inside [0, total_pages) when the filtered list shrinks.
    let current_page = Memo::new(move |_| pagination::clamp_page(state.get().page, total_pages.get()));
    let visible = Memo::new(move |_| {
        let items = filtered.get();
        pagination::page_slice(&items, current_page.get(), PAGE_SIZE).to_vec()
    });

    let is_expanded = RwSignal::new(true);
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("products")}
                    <h1 class="page__title">"Product Catalog"</h1>
                </div>
            </div>

            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div
                        class="filter-panel-header__left"
                        on:click=toggle_expanded
                    >
                        <svg
                            width="16"
                            height="16"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            class=move || {
                                if is_expanded.get() {
                                    "filter-panel__chevron filter-panel__chevron--expanded"
                                } else {
                                    "filter-panel__chevron"
                                }
                            }
                        >
                            <polyline points="6 9 12 15 18 9"></polyline>
                        </svg>
                        {icon("filter")}
                        <span class="filter-panel__title">"Filters"</span>
                        {move || {
                            let count = state.get().filters.active_count();
                            if count > 0 {
                                view! {
                                    <span class="badge badge--primary">{count}</span>
                                }.into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                    </div>

                    <div class="filter-panel-header__center">
                        <PaginationControls
                            current_page=Signal::derive(move || current_page.get())
                            total_pages=Signal::derive(move || total_pages.get())
                            total_count=Signal::derive(move || filtered.get().len())
                            on_page_change=Callback::new(go_to_page)
                        />
                    </div>

                    <div class="filter-panel-header__right">
                        <span class="text-muted">
                            {move || if state.get().is_loaded { "" } else { "Loading…" }}
                        </span>
                    </div>
                </div>

                <div class=move || {
                    if is_expanded.get() {
                        "filter-panel__collapsible filter-panel__collapsible--expanded"
                    } else {
                        "filter-panel__collapsible filter-panel__collapsible--collapsed"
                    }
                }>
                    <div class="filter-panel-content">
                        <div class="filter-field">
                            <label>"Category:"</label>
                            <select
                                class="form-control"
                                prop:value=move || state.get().filters.category.value().to_string()
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| {
                                        s.filters.category = CategoryFilter::from_value(&value);
                                    });
                                }
                            >
                                <option
                                    value="all"
                                    selected=move || state.get().filters.category == CategoryFilter::All
                                >
                                    "All"
                                </option>
                                {move || {
                                    let s = state.get();
                                    let current = s.filters.category.clone();
                                    s.categories.into_iter().map(|category| {
                                        let is_selected = current == CategoryFilter::Only(category.clone());
                                        view! {
                                            <option value=category.clone() selected=is_selected>
                                                {category.clone()}
                                            </option>
                                        }
                                    }).collect_view()
                                }}
                            </select>
                        </div>

                        <div class="filter-field">
                            <label>"Price:"</label>
                            <input
                                type="number"
                                class="form-control"
                                placeholder="Min price"
                                min="0"
                                step="0.01"
                                on:input=move |ev| {
                                    let price = filters::parse_price(&event_target_value(&ev));
                                    state.update(|s| s.filters.min_price = price);
                                }
                            />
                            <input
                                type="number"
                                class="form-control"
                                placeholder="Max price"
                                min="0"
                                step="0.01"
                                on:input=move |ev| {
                                    let price = filters::parse_price(&event_target_value(&ev));
                                    state.update(|s| s.filters.max_price = price);
                                }
                            />
                        </div>

                        <div class="filter-field">
                            <label>"Search:"</label>
                            <SearchInput
                                value=Signal::derive(move || state.get().filters.search.clone())
                                on_change=Callback::new(move |value: String| {
                                    state.update(|s| s.filters.search = value);
                                })
                                placeholder="Search by title".to_string()
                            />
                        </div>
                    </div>
                </div>
            </div>

            <div class="product-grid">
                {move || {
                    let items = visible.get();
                    if items.is_empty() {
                        if state.get().is_loaded {
                            view! {
                                <div class="empty-state">"No products match the current filters"</div>
                            }.into_any()
                        } else {
                            view! {
                                <div class="empty-state">"Loading products…"</div>
                            }.into_any()
                        }
                    } else {
                        items.into_iter().map(|product| {
                            view! { <ProductCard product=product /> }
                        }).collect_view().into_any()
                    }
                }}
            </div>
        </div>
    }
}
