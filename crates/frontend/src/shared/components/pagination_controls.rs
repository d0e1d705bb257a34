use crate::shared::hooks::PaginationHandlers;
use crate::shared::icons::icon;
use contracts::shared::pagination::{parse_page_input, PagerView, PaginationMode, PaginationState};
use leptos::prelude::*;

/// First/previous/next/last buttons, a page-number box and the page-size
/// selector. Every action goes through the owning hook's handlers.
#[component]
pub fn PaginationControls(
    /// Effective state (client tables pass the filtered total)
    #[prop(into)]
    state: Signal<PaginationState>,

    mode: PaginationMode,

    handlers: PaginationHandlers,

    /// Available page sizes
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 20, 50, 100]);
    let pager = Memo::new(move |_| PagerView::compute(&state.get(), mode));
    let on_page_change = handlers.on_page_change;
    let on_page_size_change = handlers.on_page_size_change;

    // transient text echo of the page box, reset whenever the page moves
    let (page_text, set_page_text) = signal(String::new());
    Effect::new(move |_| {
        set_page_text.set(pager.get().current_page.to_string());
    });

    let commit_page_text = move |text: String| {
        let view = pager.get_untracked();
        match parse_page_input(&text, view.total_pages) {
            Ok(page_index) => on_page_change.run(page_index),
            Err(e) => {
                log::warn!("page input rejected: {}", e);
                set_page_text.set(view.current_page.to_string());
            }
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || !pager.get().can_go_previous
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let view = pager.get_untracked();
                    if view.can_go_previous {
                        on_page_change.run(view.current_page - 2);
                    }
                }
                disabled=move || !pager.get().can_go_previous
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <input
                type="text"
                inputmode="numeric"
                class="pagination-input"
                prop:value=move || page_text.get()
                on:input=move |ev| set_page_text.set(event_target_value(&ev))
                on:change=move |ev| commit_page_text(event_target_value(&ev))
                disabled=move || pager.get().total_pages == 0
                title="Go to page"
            />
            <span class="pagination-info">
                {move || {
                    let records = state.with(|s| s.total_records.unwrap_or(0));
                    pager.get().caption(records)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let view = pager.get_untracked();
                    if view.can_go_next {
                        on_page_change.run(view.current_page);
                    }
                }
                disabled=move || !pager.get().can_go_next
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(last) = pager.get_untracked().last_page_index() {
                        on_page_change.run(last);
                    }
                }
                disabled=move || !pager.get().can_go_next
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<usize>() {
                        Ok(size) => on_page_size_change.run(size),
                        Err(e) => log::warn!("page size rejected: {}", e),
                    }
                }
                prop:value=move || state.with(|s| s.page_size.to_string())
            >
                {page_size_opts.into_iter().map(|size| {
                    view! {
                        <option
                            value=size.to_string()
                            selected=move || state.with(|s| s.page_size == size)
                        >
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
