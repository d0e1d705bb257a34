//! Clickable header cell that shows the column's sort direction.
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Amount"
//!     direction=Signal::derive(move || sorting.with(|s| s.direction_of("amount")))
//!     on_sort=Callback::new(move |multi| toggle("amount", multi))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::table::SortDirection;
use leptos::prelude::*;
use thaw::*;

/// Header cell that cycles sorting on click.
///
/// A shift-click passes `true` to `on_sort` so the column is added to the
/// existing sort instead of replacing it.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Current direction of this column, `None` when unsorted
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    on_sort: Callback<bool>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// `left`, `right` or `center`
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = match align {
        "right" => "cursor: pointer; justify-content: flex-end; padding-right: 12px;",
        "center" => "cursor: pointer; justify-content: center;",
        _ => "cursor: pointer; padding-right: 12px;",
    };

    let aria_sort = move || match direction.get() {
        Some(SortDirection::Asc) => "ascending",
        Some(SortDirection::Desc) => "descending",
        None => "none",
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width attr:aria-sort=aria_sort>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |ev: leptos::ev::MouseEvent| on_sort.run(ev.shift_key())
            >
                {label}
                <span class=move || get_sort_class(direction.get())>
                    {move || get_sort_indicator(direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
