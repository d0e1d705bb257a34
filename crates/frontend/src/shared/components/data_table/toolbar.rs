//! Filter and column-visibility menus shown above a `DataTable`.

use crate::shared::icons::icon;
use contracts::shared::table::{ColumnFilters, ColumnVisibility};
use leptos::prelude::*;

/// Set-membership filter for one column.
#[component]
pub fn ColumnFilterMenu(
    column_id: &'static str,
    #[prop(into)]
    label: String,
    /// Values offered as checkboxes
    #[prop(into)]
    options: Signal<Vec<String>>,
    #[prop(into)]
    filters: Signal<ColumnFilters>,
    on_change: Callback<ColumnFilters>,
) -> impl IntoView {
    let selected_count = move || filters.with(|f| f.values(column_id).len());

    let toggle = move |value: String| {
        let mut next = filters.get_untracked();
        next.toggle_value(column_id, &value);
        on_change.run(next);
    };

    let clear = move |_| {
        let mut next = filters.get_untracked();
        next.clear_column(column_id);
        on_change.run(next);
    };

    view! {
        <details class="table-menu">
            <summary
                class=move || {
                    if selected_count() > 0 {
                        "table-menu__trigger table-menu__trigger--active"
                    } else {
                        "table-menu__trigger"
                    }
                }
            >
                {icon("filter")}
                <span>{label}</span>
                <Show when=move || { selected_count() > 0 }>
                    <span class="table-menu__count">{selected_count}</span>
                </Show>
            </summary>
            <div class="table-menu__body">
                <For
                    each=move || options.get()
                    key=|value| value.clone()
                    children=move |value| {
                        let checked_value = value.clone();
                        let toggled_value = value.clone();
                        view! {
                            <label class="table-menu__item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        filters.with(|f| f.is_selected(column_id, &checked_value))
                                    }
                                    on:change=move |_| toggle(toggled_value.clone())
                                />
                                <span>{value}</span>
                            </label>
                        }
                    }
                />
                <Show when=move || options.with(Vec::is_empty)>
                    <div class="table-menu__empty">"No values"</div>
                </Show>
                <button class="table-menu__clear" on:click=clear disabled=move || selected_count() == 0>
                    "Clear"
                </button>
            </div>
        </details>
    }
}

/// Show/hide columns. The last visible column cannot be hidden.
#[component]
pub fn ColumnVisibilityMenu(
    /// `(id, header)` of every column
    columns: Vec<(&'static str, String)>,
    visibility: RwSignal<ColumnVisibility>,
) -> impl IntoView {
    let all_ids = StoredValue::new(columns.iter().map(|(id, _)| *id).collect::<Vec<_>>());
    let hidden_count = move || {
        all_ids.with_value(|ids| visibility.with(|v| ids.len() - v.visible_count(ids.iter().copied())))
    };

    view! {
        <details class="table-menu">
            <summary class="table-menu__trigger">
                {icon("columns")}
                <span>"Columns"</span>
                <Show when=move || { hidden_count() > 0 }>
                    <span class="table-menu__count">{hidden_count}</span>
                </Show>
            </summary>
            <div class="table-menu__body">
                {columns
                    .into_iter()
                    .map(|(id, header)| {
                        view! {
                            <label class="table-menu__item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || visibility.with(|v| v.is_visible(id))
                                    on:change=move |_| {
                                        all_ids.with_value(|ids| {
                                            visibility.update(|v| v.toggle(id, ids.iter().copied()))
                                        })
                                    }
                                />
                                <span>{header}</span>
                            </label>
                        }
                    })
                    .collect_view()}
                <button class="table-menu__clear" on:click=move |_| visibility.update(ColumnVisibility::show_all)>
                    "Show all"
                </button>
            </div>
        </details>
    }
}
