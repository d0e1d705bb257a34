//! Generic data table: toolbar, sortable header, status-aware body and
//! pagination footer.
//!
//! The table renders whatever `PaginationBinding` it is given. In client mode
//! it runs search, column filters, sorting and slicing itself; in server mode
//! it renders `data` as delivered and forwards sorting and filter edits to
//! the page through `on_sorting_change` / `on_column_filters_change`.

pub mod column;
pub mod plan;
pub mod search;
pub mod toolbar;

pub use column::{search_columns, CellRenderer, ColumnAlign, ColumnDef};
pub use plan::{BodyPlan, TablePlan};
pub use search::{ResolvedSearch, SearchMode};
pub use toolbar::{ColumnFilterMenu, ColumnVisibilityMenu};

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::use_dashboard_config;
use crate::shared::hooks::PaginationBinding;
use crate::shared::list_utils::SearchInput;
use contracts::shared::pagination::PaginationMode;
use contracts::shared::table::row_model::{self, RowQuery};
use contracts::shared::table::{
    validate_column_ids, ColumnFilters, ColumnVisibility, SortingState, TableRow as DataRow,
    TableStatus,
};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DataTable<T>(
    columns: Vec<ColumnDef<T>>,

    /// Client mode: the full list. Server mode: the current page.
    #[prop(into)]
    data: Signal<Vec<T>>,

    pagination: PaginationBinding,

    #[prop(optional, into)]
    is_loading: MaybeProp<bool>,

    /// Rendered verbatim in place of the rows
    #[prop(optional, into)]
    error: MaybeProp<String>,

    #[prop(optional)]
    enable_column_filters: bool,

    #[prop(optional)]
    enable_column_visibility: bool,

    #[prop(optional)]
    enable_global_search: bool,

    #[prop(optional, into)]
    search_placeholder: String,

    #[prop(optional)]
    search: SearchMode,

    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,

    #[prop(optional, into)]
    empty_message: MaybeProp<String>,

    #[prop(optional, into)]
    loading_message: MaybeProp<String>,

    #[prop(optional)]
    on_row_click: Option<Callback<T>>,

    #[prop(optional)]
    on_sorting_change: Option<Callback<SortingState>>,

    #[prop(optional)]
    on_column_filters_change: Option<Callback<ColumnFilters>>,

    #[prop(optional)]
    initial_sorting: SortingState,
) -> impl IntoView
where
    T: DataRow + Clone + Send + Sync + 'static,
{
    let settings = use_dashboard_config().table;
    let mode = pagination.mode;

    if let Err(e) = validate_column_ids(columns.iter().map(|c| c.id)) {
        log::error!("DataTable: {}", e);
    }

    let search_ids = StoredValue::new(search_columns(&columns));
    let menu_columns: Vec<(&'static str, String)> =
        columns.iter().map(|c| (c.id, c.header.clone())).collect();
    let filter_columns: Vec<ColumnDef<T>> =
        columns.iter().filter(|c| c.filterable).cloned().collect();
    let columns = StoredValue::new(columns);

    let search = search.resolve();
    if let Some(initial) = plan::initial_sorting_to_report(mode, &initial_sorting) {
        if let Some(callback) = on_sorting_change {
            callback.run(initial);
        }
    }
    let sorting = RwSignal::new(initial_sorting);
    let filters = RwSignal::new(ColumnFilters::new());
    let visibility = RwSignal::new(ColumnVisibility::new());

    let default_empty = settings.empty_message.clone();
    let empty_text = Signal::derive(move || plan::resolve_message(empty_message.get(), &default_empty));
    let default_loading = settings.loading_message.clone();
    let loading_text =
        Signal::derive(move || plan::resolve_message(loading_message.get(), &default_loading));
    let size_options = page_size_options.unwrap_or_else(|| settings.page_size_options.clone());

    // Rows after search, filters and sorting; server rows pass through.
    let processed = Signal::derive(move || match mode {
        PaginationMode::Client => {
            let needle = search.value.get();
            sorting.with(|sort| {
                filters.with(|active| {
                    search_ids.with_value(|ids| {
                        data.with(|rows| {
                            row_model::apply(
                                rows,
                                &RowQuery {
                                    search: &needle,
                                    search_columns: ids,
                                    filters: active,
                                    sorting: sort,
                                },
                            )
                        })
                    })
                })
            })
        }
        PaginationMode::Server => data.get(),
    });

    // Client tables page over the filtered count, not the raw list.
    let effective_state = Signal::derive(move || {
        let mut state = pagination.state.get();
        if mode == PaginationMode::Client {
            state.total_records = Some(processed.with(Vec::len));
            state.page_count = None;
        }
        state
    });

    let page_rows = Signal::derive(move || match mode {
        PaginationMode::Client => {
            let state = effective_state.get();
            processed.with(|rows| row_model::page_slice(rows, &state).to_vec())
        }
        PaginationMode::Server => processed.get(),
    });

    let status = Signal::derive(move || {
        let error = error.get();
        TableStatus::resolve(
            is_loading.get().unwrap_or(false),
            error.as_deref(),
            processed.with(Vec::len),
        )
    });

    // A new search or filter set starts again from the first page.
    Effect::new(move |prev: Option<()>| {
        search.value.track();
        filters.track();
        if let Some(page) = plan::page_after_query_change(mode, prev.is_none()) {
            pagination.handlers.on_page_change.run(page);
        }
    });

    let toggle_sort = move |column_id: &'static str, multi: bool| {
        sorting.update(|s| s.toggle(column_id, multi));
        if let Some(callback) = on_sorting_change {
            callback.run(sorting.get_untracked());
        }
    };

    let set_filters = Callback::new(move |next: ColumnFilters| {
        filters.set(next.clone());
        if let Some(callback) = on_column_filters_change {
            callback.run(next);
        }
    });

    let visible_columns = move || {
        columns.with_value(|cols| {
            visibility.with(|v| {
                cols.iter()
                    .filter(|c| v.is_visible(c.id))
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    };

    let table_plan = Memo::new(move |_| {
        let column_count = columns.with_value(|cols| {
            visibility.with(|v| cols.iter().filter(|c| v.is_visible(c.id)).count())
        });
        status.with(|current| {
            TablePlan::of(
                current,
                effective_state.with(|s| s.page_size),
                column_count,
                &empty_text.get(),
            )
        })
    });

    let header = move || {
        visible_columns()
            .into_iter()
            .map(|col| {
                let id = col.id;
                let align = match col.align {
                    ColumnAlign::Left => "left",
                    ColumnAlign::Right => "right",
                    ColumnAlign::Center => "center",
                };
                let min_width = col.min_width.map(f64::from).unwrap_or(100.0);
                if col.sortable {
                    view! {
                        <SortableHeaderCell
                            label=col.header
                            direction=Signal::derive(move || sorting.with(|s| s.direction_of(id)))
                            on_sort=Callback::new(move |multi: bool| toggle_sort(id, multi))
                            min_width=min_width
                            align=align
                        />
                    }
                    .into_any()
                } else {
                    let class = col.align.class();
                    let label = col.header;
                    view! {
                        <TableHeaderCell resizable=false min_width=min_width>
                            <div class=class>{label}</div>
                        </TableHeaderCell>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    let body = move || match table_plan.get().body {
        BodyPlan::Skeleton { rows, columns: cell_count } => (0..rows)
            .map(|_| {
                view! {
                    <TableRow class="data-table__row data-table__row--skeleton">
                        {(0..cell_count)
                            .map(|_| {
                                view! {
                                    <TableCell>
                                        <span class="skeleton-bar"></span>
                                    </TableCell>
                                }
                            })
                            .collect_view()}
                    </TableRow>
                }
            })
            .collect_view()
            .into_any(),
        BodyPlan::Message { text, is_error } => {
            let colspan = visible_columns().len().max(1).to_string();
            let class = if is_error {
                "data-table__message data-table__message--error"
            } else {
                "data-table__message"
            };
            view! {
                <TableRow>
                    <TableCell attr:colspan=colspan>
                        <div class=class role=is_error.then_some("alert")>{text}</div>
                    </TableCell>
                </TableRow>
            }
            .into_any()
        }
        BodyPlan::Rows => {
            let cols = visible_columns();
            page_rows
                .get()
                .into_iter()
                .map(|row| {
                    let cells = cols
                        .iter()
                        .map(|col| {
                            let content = (col.cell)(&row);
                            let class = col.align.class();
                            view! {
                                <TableCell>
                                    <TableCellLayout truncate=true>
                                        <div class=class>{content}</div>
                                    </TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view();
                    let row_class = if on_row_click.is_some() {
                        "data-table__row data-table__row--clickable"
                    } else {
                        "data-table__row"
                    };
                    view! {
                        <TableRow
                            class=row_class
                            on:click=move |_| {
                                if let Some(callback) = on_row_click {
                                    callback.run(row.clone());
                                }
                            }
                        >
                            {cells}
                        </TableRow>
                    }
                })
                .collect_view()
                .into_any()
        }
    };

    let filter_menus = filter_columns
        .into_iter()
        .map(|col| {
            let id = col.id;
            let options = match col.filter_options {
                Some(fixed) => Signal::derive(move || fixed.clone()),
                None => Signal::derive(move || data.with(|rows| row_model::facet_values(rows, id))),
            };
            view! {
                <ColumnFilterMenu
                    column_id=id
                    label=col.header
                    options=options
                    filters=filters
                    on_change=set_filters
                />
            }
        })
        .collect_view();

    let has_toolbar = enable_global_search || enable_column_filters || enable_column_visibility;
    let debounce_ms = settings.search_debounce_ms;

    view! {
        <div class="data-table">
            {has_toolbar.then(|| view! {
                <div class="data-table__toolbar">
                    {enable_global_search.then(|| view! {
                        <SearchInput
                            value=search.value
                            on_change=search.set
                            placeholder=search_placeholder
                            debounce_ms=debounce_ms
                        />
                    })}
                    {enable_column_filters.then(|| filter_menus)}
                    {enable_column_visibility.then(|| view! {
                        <ColumnVisibilityMenu columns=menu_columns visibility=visibility />
                    })}
                </div>
            })}

            <Show when=move || table_plan.with(TablePlan::is_loading)>
                <div class="data-table__status" role="status">{move || loading_text.get()}</div>
            </Show>

            <div class="table-wrapper">
                <Table class="data-table__table" attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>{header}</TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>

            <Show when=move || table_plan.with(|p| p.show_footer)>
                <div class="data-table__footer">
                    <PaginationControls
                        state=effective_state
                        mode=mode
                        handlers=pagination.handlers
                        page_size_options=size_options.clone()
                    />
                </div>
            </Show>
        </div>
    }
}
