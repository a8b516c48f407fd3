//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title, the tenant selector
//! and the logged-in user with logout.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use crate::system::auth::tenant_select::TenantSelect;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();
    let user_name = move || session.state.with(|s| s.display_name());
    let perfil = move || session.state.with(|s| s.perfil.clone().unwrap_or_default());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar navegação" } else { "Mostrar navegação" }
                >
                    {move || if is_sidebar_visible() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
                <span class="top-header__title">"Merenda"</span>
                <span class="top-header__page">{move || ctx.route.get().title()}</span>
            </div>

            <div class="top-header__actions">
                <TenantSelect />

                <div class="top-header__user">
                    <span>{user_name}</span>
                    <span class="top-header__role">{perfil}</span>
                </div>

                <button class="top-header__icon-btn" on:click=move |_| session.logout() title="Sair">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
