use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKey {
    #[default]
    Projects,
    PurchaseOrders,
    Vendors,
}

impl PageKey {
    pub fn all() -> [PageKey; 3] {
        [PageKey::Projects, PageKey::PurchaseOrders, PageKey::Vendors]
    }

    /// Value of the `?page=` query parameter.
    pub fn key(self) -> &'static str {
        match self {
            PageKey::Projects => "projects",
            PageKey::PurchaseOrders => "purchase_orders",
            PageKey::Vendors => "vendors",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageKey::Projects => "Projects",
            PageKey::PurchaseOrders => "Purchase Orders",
            PageKey::Vendors => "Vendors",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PageKey::Projects => "projects",
            PageKey::PurchaseOrders => "procurement",
            PageKey::Vendors => "vendors",
        }
    }
}

/// Query parameters the shell understands.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ShellQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<PageKey>,
}

/// Page named by a location search string such as `?page=vendors`.
pub fn page_from_query(search: &str) -> Option<PageKey> {
    serde_qs::from_str::<ShellQuery>(search.trim_start_matches('?'))
        .ok()
        .and_then(|q| q.page)
}

/// Location search string for a page, including the leading `?`.
pub fn query_for(page: PageKey) -> String {
    let query = serde_qs::to_string(&ShellQuery { page: Some(page) }).unwrap_or_default();
    format!("?{}", query)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PageKey>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(PageKey::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Take the initial page from `?page=` and mirror later navigation back
    /// into the URL.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for(this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: PageKey) {
        leptos::logging::log!("navigate: {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_round_trip_for_every_page() {
        for page in PageKey::all() {
            assert_eq!(page_from_query(&query_for(page)), Some(page));
            assert_eq!(query_for(page), format!("?page={}", page.key()));
        }
        assert_eq!(query_for(PageKey::PurchaseOrders), "?page=purchase_orders");
    }

    #[test]
    fn test_unknown_or_missing_page() {
        assert_eq!(page_from_query(""), None);
        assert_eq!(page_from_query("?page=payroll"), None);
        assert_eq!(page_from_query("?other=1"), None);
    }
}
