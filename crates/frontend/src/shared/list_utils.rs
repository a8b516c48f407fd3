/// Shared list UI helpers: search box, match highlight, sort indicators
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::config::config;

/// Splits `text` into `(segment, is_match)` runs, case-insensitive
pub fn match_segments(text: &str, filter: &str) -> Vec<(String, bool)> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return vec![(text.to_string(), false)];
    }

    // offsets are only valid while lowering keeps the byte length
    let lower = text.to_lowercase();
    if lower.len() != text.len() {
        return vec![(text.to_string(), false)];
    }

    let mut segments = Vec::new();
    let mut last = 0;
    while let Some(pos) = lower[last..].find(&needle) {
        let start = last + pos;
        let end = start + needle.len();
        if start > last {
            segments.push((text[last..start].to_string(), false));
        }
        segments.push((text[start..end].to_string(), true));
        last = end;
    }
    if last < text.len() {
        segments.push((text[last..].to_string(), false));
    }
    if segments.is_empty() {
        segments.push((String::new(), false));
    }
    segments
}

/// Highlight of the search term inside a cell
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = match_segments(text, filter)
        .into_iter()
        .map(|(segment, is_match)| {
            if is_match {
                view! { <mark class="table__highlight">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect_view();
    view! { <>{parts}</> }.into_any()
}

/// Sort indicator for a header; lists only sort ascending
pub fn get_sort_indicator(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        " ▲"
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Applied value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Pesquisar...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    // Replacing the pending timeout drops it, which cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        input_value.set(new_value.clone());
        let timeout = Timeout::new(config().search_debounce_ms, move || {
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    // Cleared from outside (e.g. "Limpar filtros")
    Effect::new(move |_| {
        let applied = value.get();
        if applied.is_empty() && !input_value.get_untracked().is_empty() {
            input_value.set(String::new());
        }
    });

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if value.get().trim().is_empty() {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Limpar">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_segments() {
        assert_eq!(
            match_segments("Distribuidora LTDA", "ltda"),
            vec![("Distribuidora ".to_string(), false), ("LTDA".to_string(), true)]
        );
        assert_eq!(match_segments("Arroz", ""), vec![("Arroz".to_string(), false)]);
        assert_eq!(
            match_segments("aXa", "a"),
            vec![("a".to_string(), true), ("X".to_string(), false), ("a".to_string(), true)]
        );
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("nome", "nome"), " ▲");
        assert_eq!(get_sort_indicator("nome", "cnpj"), " ⇅");
        assert!(get_sort_class("nome", "nome").ends_with("--active"));
    }
}
