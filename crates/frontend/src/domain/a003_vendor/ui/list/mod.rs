//! Vendor directory. The page owns the search text so the trade shortcuts
//! and the table's search box stay in step.

use crate::shared::components::data_table::{ColumnAlign, ColumnDef, DataTable, SearchMode};
use crate::shared::components::ui::Badge;
use crate::shared::config::use_dashboard_config;
use crate::shared::hooks::use_client_pagination;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use contracts::domain::a003_vendor::{mock, Vendor};
use leptos::prelude::*;

/// Distinct trades, sorted, for the shortcut buttons.
pub fn trades(vendors: &[Vendor]) -> Vec<String> {
    let mut trades: Vec<String> = vendors.iter().map(|v| v.trade.clone()).collect();
    trades.sort();
    trades.dedup();
    trades
}

fn columns() -> Vec<ColumnDef<Vendor>> {
    vec![
        ColumnDef::text("name", "Vendor").sortable().min_width(180),
        ColumnDef::text("trade", "Trade").sortable().filterable(),
        ColumnDef::text("city", "City").sortable().filterable(),
        ColumnDef::new("contact_email", "Contact", |v: &Vendor| {
            let href = format!("mailto:{}", v.contact_email);
            view! { <a href=href>{v.contact_email.clone()}</a> }.into_any()
        }),
        ColumnDef::new("rating", "Rating", |v: &Vendor| format!("{:.1}", v.rating).into_any())
            .sortable()
            .not_searchable()
            .align(ColumnAlign::Right),
        ColumnDef::text("open_orders", "Open orders")
            .sortable()
            .not_searchable()
            .align(ColumnAlign::Right),
        ColumnDef::new("preferred", "Preferred", |v: &Vendor| {
            if v.preferred {
                view! { <Badge variant="success">"Preferred"</Badge> }.into_any()
            } else {
                "".into_any()
            }
        })
        .not_searchable()
        .align(ColumnAlign::Center),
    ]
}

#[component]
pub fn VendorList() -> impl IntoView {
    let config = use_dashboard_config();
    let all_vendors = StoredValue::new(mock::dataset());
    let preferred_only = RwSignal::new(false);
    let search = RwSignal::new(String::new());

    let vendors = Signal::derive(move || {
        let only_preferred = preferred_only.get();
        all_vendors.with_value(|all| {
            all.iter()
                .filter(|v| !only_preferred || v.preferred)
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let pagination = use_client_pagination(vendors, config.table.default_page_size);
    let trade_shortcuts = all_vendors.with_value(|all| trades(all));

    view! {
        <PageFrame page_id="a003_vendor--list" category=PAGE_CAT_LIST>
            <PageHeader title="Vendors" subtitle="Approved suppliers and subcontractors">
                <label class="page__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || preferred_only.get()
                        on:change=move |_| preferred_only.update(|v| *v = !*v)
                    />
                    <span>"Preferred only"</span>
                </label>
            </PageHeader>

            <div class="page__content">
                <div class="chip-row">
                    {trade_shortcuts.into_iter().map(|trade| {
                        let label = trade.clone();
                        let active_trade = trade.clone();
                        view! {
                            <button
                                class="chip"
                                class:chip--active=move || search.with(|s| *s == active_trade)
                                on:click=move |_| search.set(trade.clone())
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                    <Show when=move || search.with(|s| !s.is_empty())>
                        <span class="chip-row__hint">
                            {move || format!("Showing vendors matching \"{}\"", search.get())}
                        </span>
                    </Show>
                </div>

                <DataTable
                    columns=columns()
                    data=vendors
                    pagination=pagination
                    enable_global_search=true
                    enable_column_filters=true
                    search=SearchMode::controlled(search, Callback::new(move |v: String| search.set(v)))
                    search_placeholder="Search vendor, trade, city..."
                    page_size_options=vec![5, 10, 20]
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trades_are_distinct_and_sorted() {
        let list = trades(&mock::dataset());
        let mut sorted = list.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(list, sorted);
        assert!(list.contains(&"Steel".to_string()));
    }
}
