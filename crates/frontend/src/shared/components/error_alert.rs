use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Inline error with optional retry and dismiss
#[component]
pub fn ErrorAlert(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="alert alert--error" role="alert">
                    <span class="alert__text">{text}</span>
                    {on_retry.map(|retry| view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| retry.run(())>
                            {icon("refresh")}
                            " Tentar novamente"
                        </Button>
                    })}
                    {on_dismiss.map(|dismiss| view! {
                        <button class="button button--icon" on:click=move |_| dismiss.run(()) title="Fechar">
                            {icon("x")}
                        </button>
                    })}
                </div>
            }
        })
    }
}
