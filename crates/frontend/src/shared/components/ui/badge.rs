use leptos::prelude::*;

fn variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Coloured pill for status cells.
#[component]
pub fn Badge(
    /// `primary`, `success`, `warning`, `error` or `neutral` (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge {}", variant_class(variant.get().as_deref()))>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_class() {
        assert_eq!(variant_class(Some("warning")), "badge--warning");
        assert_eq!(variant_class(Some("unknown")), "badge--neutral");
        assert_eq!(variant_class(None), "badge--neutral");
    }
}
