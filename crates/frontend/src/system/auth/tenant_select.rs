use leptos::prelude::*;

use super::context::use_auth;

/// Switches `X-Tenant-ID`; hidden when the login offered a single tenant
#[component]
pub fn TenantSelect() -> impl IntoView {
    let session = use_auth();
    let tenants = move || session.state.with(|s| s.available_tenants.clone());
    let current = move || session.state.with(|s| s.current_tenant_id.clone().unwrap_or_default());

    view! {
        <Show when=move || session.state.with(|s| s.available_tenants.len() > 1)>
            <select
                class="form__select tenant-select"
                title="Secretaria"
                prop:value=current
                on:change=move |ev| session.switch_tenant(&event_target_value(&ev))
            >
                {move || tenants().into_iter().map(|t| {
                    let selected = t.id == current();
                    view! { <option value=t.id.clone() selected=selected>{t.nome.clone()}</option> }
                }).collect_view()}
            </select>
        </Show>
    }
}
