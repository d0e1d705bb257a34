//! Purchase orders: too many rows to ship at once, so every page, sort and
//! filter goes through the loader.

use crate::domain::a002_purchase_order::api::{fetch_purchase_orders, LoaderOptions};
use crate::shared::components::data_table::{ColumnAlign, ColumnDef, DataTable, SearchMode};
use crate::shared::components::table::{format_money, format_number_int};
use crate::shared::components::ui::Badge;
use crate::shared::config::use_dashboard_config;
use crate::shared::date_utils::format_date;
use crate::shared::hooks::use_server_pagination;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use contracts::domain::a002_purchase_order::{mock, PurchaseOrder};
use contracts::shared::table::{ColumnFilters, SortDirection, SortingState};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn columns() -> Vec<ColumnDef<PurchaseOrder>> {
    vec![
        ColumnDef::text("number", "PO number").sortable().min_width(110),
        ColumnDef::text("project_code", "Project").sortable(),
        ColumnDef::text("vendor", "Vendor")
            .sortable()
            .filter_options(mock::vendor_options())
            .min_width(170),
        ColumnDef::text("item", "Item").sortable().min_width(220),
        ColumnDef::text("category", "Category")
            .sortable()
            .filter_options(mock::category_options()),
        ColumnDef::new("quantity", "Qty", |po: &PurchaseOrder| {
            format_number_int(po.quantity as f64).into_any()
        })
        .sortable()
        .align(ColumnAlign::Right),
        ColumnDef::new("amount", "Amount", |po: &PurchaseOrder| {
            format_money(po.amount()).into_any()
        })
        .sortable()
        .align(ColumnAlign::Right),
        ColumnDef::new("status", "Status", |po: &PurchaseOrder| {
            let status = po.status;
            view! { <Badge variant=status.badge_variant()>{status.display_name()}</Badge> }
                .into_any()
        })
        .sortable()
        .filter_options(mock::status_options()),
        ColumnDef::new("ordered_at", "Ordered", |po: &PurchaseOrder| {
            format_date(&po.ordered_at).into_any()
        })
        .sortable(),
    ]
}

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let config = use_dashboard_config();
    let latency_ms = config.loader.latency_ms;

    let (rows, set_rows) = signal(Vec::<PurchaseOrder>::new());
    let (total_records, set_total_records) = signal(None::<usize>);
    let (page_count, set_page_count) = signal(None::<usize>);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (search, set_search) = signal(String::new());
    let simulate_outage = RwSignal::new(false);
    let reload = RwSignal::new(0u32);

    let server = use_server_pagination(
        config.table.default_page_size,
        total_records.into(),
        page_count.into(),
    );

    // Totals written back by a load must not trigger another load.
    let page_position = Memo::new(move |_| {
        server
            .binding
            .state
            .with(|s| (s.page_index, s.page_size))
    });
    let sorting = Memo::new(move |_| server.sorting.get());
    let column_filters = Memo::new(move |_| server.column_filters.get());

    Effect::new(move |_| {
        page_position.track();
        sorting.track();
        column_filters.track();
        reload.track();
        let outage = simulate_outage.get();
        let term = search.get();

        let request = server.next_request(&term);
        let generation = request.generation;
        let page_size = request.page_size;
        set_is_loading.set(true);

        spawn_local(async move {
            let result = fetch_purchase_orders(
                request,
                LoaderOptions {
                    latency_ms,
                    simulate_outage: outage,
                },
            )
            .await;

            if !server.is_current(generation) {
                log::debug!("purchase orders: dropped stale response gen={}", generation);
                return;
            }

            match result {
                Ok(response) => {
                    set_total_records.set(Some(response.total_count));
                    set_page_count.set(Some(response.page_count(page_size)));
                    set_rows.set(response.items);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("purchase orders: load failed: {}", e);
                    set_rows.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    });

    let on_search = Callback::new(move |value: String| {
        set_search.set(value);
        server.binding.handlers.on_page_change.run(0);
    });

    // A narrower filter set may not reach the current page.
    let on_column_filters_change = Callback::new(move |filters: ColumnFilters| {
        server.on_column_filters_change.run(filters);
        server.binding.handlers.on_page_change.run(0);
    });

    view! {
        <PageFrame page_id="a002_purchase_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Purchase Orders" subtitle="Procurement across all sites">
                <label class="page__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || simulate_outage.get()
                        on:change=move |_| simulate_outage.update(|v| *v = !*v)
                    />
                    <span>"Simulate outage"</span>
                </label>
                <button
                    class="button button--secondary"
                    on:click=move |_| reload.update(|n| *n += 1)
                    disabled=move || is_loading.get()
                >
                    {icon("refresh")}
                    <span>"Retry"</span>
                </button>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    columns=columns()
                    data=rows
                    pagination=server.binding
                    is_loading=is_loading
                    error=error
                    enable_global_search=true
                    enable_column_filters=true
                    enable_column_visibility=true
                    search=SearchMode::controlled(search, on_search)
                    search_placeholder="Search PO number, vendor, item, project..."
                    initial_sorting=SortingState::by("ordered_at", SortDirection::Desc)
                    on_sorting_change=server.on_sorting_change
                    on_column_filters_change=on_column_filters_change
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::{validate_column_ids, TableRow};

    #[test]
    fn test_column_ids_match_row_contract() {
        let columns = columns();
        assert!(validate_column_ids(columns.iter().map(|c| c.id)).is_ok());
        let sample = &mock::dataset()[0];
        for column in &columns {
            assert!(sample.cell_text(column.id).is_some(), "{}", column.id);
        }
    }
}
