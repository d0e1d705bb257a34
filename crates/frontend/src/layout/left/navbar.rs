use crate::layout::global_context::{AppGlobalContext, PageKey};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="main-nav-bar">
            <ul>
                {PageKey::all().into_iter().map(|page| {
                    view! {
                        <li
                            class:active=move || ctx.active.get() == page
                            on:click=move |_| ctx.navigate(page)
                        >
                            {icon(page.icon())}
                            <span>{page.title()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
