use super::binding::PaginationBinding;
use contracts::shared::pagination::{PageRequest, RequestGeneration, ServerPaginator};
use contracts::shared::table::{ColumnFilters, SortingState};
use leptos::prelude::*;

/// Page, sorting and filter state for a table fed by an external loader.
///
/// The hook never fetches. The page reacts to `binding.state`, `sorting` and
/// `column_filters`, calls its loader with `next_request`, and drops any
/// response for which `is_current` is false.
#[derive(Clone, Copy)]
pub struct ServerPagination {
    paginator: RwSignal<ServerPaginator>,
    generation: StoredValue<RequestGeneration>,
    pub binding: PaginationBinding,
    pub sorting: Signal<SortingState>,
    pub column_filters: Signal<ColumnFilters>,
    pub on_sorting_change: Callback<SortingState>,
    pub on_column_filters_change: Callback<ColumnFilters>,
}

impl ServerPagination {
    /// Snapshot the current state as a request under a fresh generation.
    pub fn next_request(&self, search: &str) -> PageRequest {
        let mut generation = self.generation.get_value();
        let id = generation.next();
        self.generation.set_value(generation);
        self.paginator.with_untracked(|p| p.request(id, search))
    }

    /// `false` once a newer request has been issued or the page is gone.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation
            .try_get_value()
            .map(|g| g.is_current(generation))
            .unwrap_or(false)
    }
}

pub fn use_server_pagination(
    initial_page_size: usize,
    total_records: Signal<Option<usize>>,
    page_count: Signal<Option<usize>>,
) -> ServerPagination {
    let paginator = RwSignal::new(ServerPaginator::new(
        initial_page_size,
        total_records.get_untracked(),
        page_count.get_untracked(),
    ));

    Effect::new(move |_| {
        let total = total_records.get();
        let pages = page_count.get();
        paginator.maybe_update(|p| p.sync_totals(total, pages));
    });

    ServerPagination::from_paginator(paginator)
}

impl ServerPagination {
    fn from_paginator(paginator: RwSignal<ServerPaginator>) -> Self {
        let sorting = Signal::derive(move || paginator.with(|p| p.sorting().clone()));
        let column_filters = Signal::derive(move || paginator.with(|p| p.column_filters().clone()));

        let on_sorting_change = Callback::new(move |next: SortingState| {
            log::debug!("server pagination: sorting -> {:?}", next.entries());
            paginator.update(|p| p.set_sorting(next));
        });

        let on_column_filters_change = Callback::new(move |next: ColumnFilters| {
            log::debug!("server pagination: {} column filter(s)", next.active_count());
            paginator.update(|p| p.set_column_filters(next));
        });

        ServerPagination {
            paginator,
            generation: StoredValue::new(RequestGeneration::new()),
            binding: PaginationBinding::bind(paginator),
            sorting,
            column_filters,
            on_sorting_change,
            on_column_filters_change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::SortDirection;

    #[test]
    fn test_requests_carry_fresh_generations() {
        let owner = Owner::new();
        owner.with(|| {
            let server =
                ServerPagination::from_paginator(RwSignal::new(ServerPaginator::new(20, None, None)));
            server.binding.handlers.on_page_change.run(3);
            server
                .on_sorting_change
                .run(SortingState::by("amount", SortDirection::Desc));

            let first = server.next_request(" cable ");
            assert_eq!(first.page_index, 3);
            assert_eq!(first.search, "cable");
            assert_eq!(first.sorting.direction_of("amount"), Some(SortDirection::Desc));
            assert!(server.is_current(first.generation));

            let second = server.next_request("");
            assert!(!server.is_current(first.generation));
            assert!(server.is_current(second.generation));
        });
    }

    #[test]
    fn test_sorting_and_filters_keep_page() {
        let owner = Owner::new();
        owner.with(|| {
            let server =
                ServerPagination::from_paginator(RwSignal::new(ServerPaginator::new(10, Some(90), Some(9))));
            server.binding.handlers.on_page_change.run(5);
            let mut filters = ColumnFilters::new();
            filters.set("status", vec!["Draft".into()]);
            server.on_column_filters_change.run(filters.clone());
            server.on_sorting_change.run(SortingState::by("number", SortDirection::Asc));

            assert_eq!(server.binding.state.get_untracked().page_index, 5);
            assert_eq!(server.column_filters.get_untracked(), filters);
        });
    }
}
