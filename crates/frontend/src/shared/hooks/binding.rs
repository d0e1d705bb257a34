use contracts::shared::pagination::{PaginationMode, PaginationState, Paginator};
use leptos::prelude::*;

/// Callbacks that mutate the paginator owned by a hook.
#[derive(Clone, Copy)]
pub struct PaginationHandlers {
    pub on_page_change: Callback<usize>,
    pub on_page_size_change: Callback<usize>,
}

/// What a table needs from either pagination hook.
///
/// Client and server hooks both produce one, so `DataTable` and
/// `PaginationControls` never care which strategy is behind it.
#[derive(Clone, Copy)]
pub struct PaginationBinding {
    pub state: Signal<PaginationState>,
    pub handlers: PaginationHandlers,
    pub mode: PaginationMode,
}

impl PaginationBinding {
    /// Wrap a reactive paginator into the shared binding.
    pub fn bind<P>(paginator: RwSignal<P>) -> Self
    where
        P: Paginator + Send + Sync + 'static,
    {
        let mode = paginator.with_untracked(|p| p.mode());
        let state = Signal::derive(move || paginator.with(|p| p.state()));

        let on_page_change = Callback::new(move |page_index: usize| {
            log::debug!("{:?} pagination: page -> {}", mode, page_index);
            paginator.update(|p| p.set_page(page_index));
        });

        let on_page_size_change = Callback::new(move |page_size: usize| {
            if page_size == 0 {
                log::warn!("{:?} pagination: page size 0 clamped to 1", mode);
            }
            log::debug!("{:?} pagination: page size -> {}", mode, page_size);
            paginator.update(|p| p.set_page_size(page_size));
        });

        Self {
            state,
            handlers: PaginationHandlers {
                on_page_change,
                on_page_size_change,
            },
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::{ClientPaginator, ServerPaginator};

    #[test]
    fn test_handlers_drive_client_paginator() {
        let owner = Owner::new();
        owner.with(|| {
            let binding = PaginationBinding::bind(RwSignal::new(ClientPaginator::new(25, 10)));
            assert_eq!(binding.mode, PaginationMode::Client);

            binding.handlers.on_page_change.run(2);
            assert_eq!(binding.state.get_untracked().page_index, 2);

            binding.handlers.on_page_size_change.run(20);
            let state = binding.state.get_untracked();
            assert_eq!(state.page_size, 20);
            assert_eq!(state.page_index, 0);
        });
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let owner = Owner::new();
        owner.with(|| {
            let binding = PaginationBinding::bind(RwSignal::new(ServerPaginator::new(10, None, None)));
            assert_eq!(binding.mode, PaginationMode::Server);
            binding.handlers.on_page_size_change.run(0);
            assert_eq!(binding.state.get_untracked().page_size, 1);
        });
    }
}
