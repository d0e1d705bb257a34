//! Root wrapper and header shared by every page of the shell.
//!
//! Each page root carries `id = "{entity}--{category}"` and
//! `data-page-category`, e.g. `a001_project--list`.

use leptos::prelude::*;

/// Table page.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record view.
pub const PAGE_CAT_DETAIL: &str = "detail";

fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`
    page_id: &'static str,
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class=page_class(category) data-page-category=category>
            {children()}
        </div>
    }
}

/// Title row with optional subtitle; children go to the action area.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-text">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! { <div class="page__subtitle">{s}</div> })}
            </div>
            <div class="page__actions">{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class(PAGE_CAT_DETAIL), "page page--detail");
        assert_eq!(page_class("other"), "page");
    }
}
