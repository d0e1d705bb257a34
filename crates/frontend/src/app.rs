use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(load_config());
    provide_context(AppGlobalContext::new());

    view! {
        <AppShell />
    }
}
