use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || variant_class(variant.get().as_deref().unwrap_or("neutral"));
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

pub fn variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Ativo / Inativo
#[component]
pub fn StatusBadge(#[prop(into)] ativo: Signal<bool>) -> impl IntoView {
    view! {
        <span class=move || {
            if ativo.get() { "badge badge--status badge--success" } else { "badge badge--status badge--neutral" }
        }>
            {move || status_label(ativo.get())}
        </span>
    }
}

pub fn status_label(ativo: bool) -> &'static str {
    if ativo {
        "Ativo"
    } else {
        "Inativo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants() {
        assert_eq!(variant_class("warning"), "badge--warning");
        assert_eq!(variant_class("other"), "badge--neutral");
        assert_eq!(status_label(false), "Inativo");
    }
}
