//! Root layout: navigation on the left, the active list page in the center.

use crate::domain::a001_project::ui::list::ProjectList;
use crate::domain::a002_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a003_vendor::ui::list::VendorList;
use crate::layout::global_context::{AppGlobalContext, PageKey};
use crate::layout::left::Navbar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Active page, keyed so that switching pages disposes the previous one.
#[component]
fn ActivePage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    move || match ctx.active.get() {
        PageKey::Projects => view! { <ProjectList /> }.into_any(),
        PageKey::PurchaseOrders => view! { <PurchaseOrderList /> }.into_any(),
        PageKey::Vendors => view! { <VendorList /> }.into_any(),
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Navbar /> }.into_any()
            center=|| view! { <ActivePage /> }.into_any()
        />
    }
}
