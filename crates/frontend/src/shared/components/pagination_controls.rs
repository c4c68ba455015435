use crate::catalog::pagination::{page_items, PageItem};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// How many page numbers are shown around the current page
const PAGE_RANGE_DISPLAYED: usize = 5;
/// How many page numbers stay pinned at each end of the bar
const MARGIN_PAGES_DISPLAYED: usize = 2;

/// PaginationControls component - numbered page navigation with ellipsis
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items in the paged list
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_items(current, total_pages.get(), PAGE_RANGE_DISPLAYED, MARGIN_PAGES_DISPLAYED)
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(idx) => view! {
                            <button
                                class=if idx == current {
                                    "pagination-btn pagination-btn--active"
                                } else {
                                    "pagination-btn"
                                }
                                on:click=move |_| on_page_change.run(idx)
                            >
                                {(idx + 1).to_string()}
                            </button>
                        }.into_any(),
                        PageItem::Break => view! {
                            <span class="pagination-break">"…"</span>
                        }.into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || {
                    let page = current_page.get();
                    page + 1 >= total_pages.get()
                }
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || {
                    let count = total_count.get();
                    if count == 1 {
                        "1 item".to_string()
                    } else {
                        format!("{} items", count)
                    }
                }}
            </span>
        </div>
    }
}
