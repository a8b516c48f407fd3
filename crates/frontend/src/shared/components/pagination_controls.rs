use crate::shared::icons::icon;
use crate::shared::list::pagination::Pagination;
use leptos::prelude::*;

/// First/previous/next/last buttons, page summary and rows per page
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Pagination>,
    /// Total count of filtered items
    #[prop(into)]
    total_count: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let current_page = move || pagination.get().page;
    let total_pages = move || pagination.get().total_pages(total_count.get());
    let is_first = move || !pagination.get().has_previous();
    let is_last = move || !pagination.get().has_next(total_count.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=is_first
                title="Primeira página"
            >
                "«"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=is_first
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page() + 1, total_pages())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if !is_last() {
                        on_page_change.run(current_page() + 1);
                    }
                }
                disabled=is_last
                title="Próxima página"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages() - 1)
                disabled=is_last
                title="Última página"
            >
                "»"
            </button>
            <span class="pagination-summary">
                {move || pagination.get().summary(total_count.get()).to_string()}
            </span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || pagination.get().rows_per_page.to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || pagination.get().rows_per_page == size>
                            {format!("{} por página", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
