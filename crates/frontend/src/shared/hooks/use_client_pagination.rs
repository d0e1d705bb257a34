use super::binding::PaginationBinding;
use contracts::shared::pagination::ClientPaginator;
use leptos::prelude::*;

/// Page state over a fully loaded list.
///
/// `total_records` follows `data.len()`; any change of the length (filtering,
/// deleting rows, a reload) sends the table back to the first page.
///
/// # Example
/// ```ignore
/// let projects = RwSignal::new(mock::dataset());
/// let pagination = use_client_pagination(projects.into(), 10);
///
/// view! { <DataTable columns=columns data=projects pagination=pagination /> }
/// ```
pub fn use_client_pagination<T>(data: Signal<Vec<T>>, initial_page_size: usize) -> PaginationBinding
where
    T: Send + Sync + 'static,
{
    let initial_len = data.with_untracked(Vec::len);
    let paginator = RwSignal::new(ClientPaginator::new(initial_len, initial_page_size));

    Effect::new(move |_| {
        let len = data.with(Vec::len);
        paginator.maybe_update(|p| p.sync_data_len(len));
    });

    PaginationBinding::bind(paginator)
}
