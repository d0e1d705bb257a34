/// Shared list helpers: debounced search input and sort indicators
use contracts::shared::table::SortDirection;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Debounced search box with a clear button.
///
/// Keeps its own echo of the typed text and reports to `on_change` only after
/// `debounce_ms` of inactivity. External changes to `value` (controlled
/// search) are mirrored into the echo.
#[component]
pub fn SearchInput(
    /// Current applied search value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value once typing settles
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional, default = 300)]
    debounce_ms: u32,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());

    Effect::new(move |_| {
        let applied = value.get();
        if applied != input_value.get_untracked() {
            set_input_value.set(applied);
        }
    });

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            on_change.run(new_value);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref::<js_sys::Function>(),
            debounce_ms as i32,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("search debounce timer failed: {:?}", e),
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Sort indicator for a header
pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => " ⇅",
    }
}

/// CSS class for the sort indicator
pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(Some(SortDirection::Asc)), " ▲");
        assert_eq!(get_sort_indicator(Some(SortDirection::Desc)), " ▼");
        assert_eq!(get_sort_indicator(None), " ⇅");
        assert_eq!(get_sort_class(None), "sort-icon");
    }
}
