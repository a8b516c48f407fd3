use leptos::prelude::*;

/// Read-only labelled value inside a `details-grid`
#[component]
pub fn DetailField(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <div class="form__value">{move || value.get()}</div>
        </div>
    }
}
