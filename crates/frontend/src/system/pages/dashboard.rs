use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::layout::left::sidebar::menu_groups;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DASHBOARD};
use crate::system::auth::context::use_auth;
use crate::system::auth::tenant_select::TenantSelect;

/// Landing page: greeting, tenant and shortcuts to every list
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_auth();

    let greeting = move || session.state.with(|s| format!("Olá, {}", s.display_name()));
    let perfil = move || session.state.with(|s| s.perfil.clone().unwrap_or_default());
    let tenant = move || {
        session
            .state
            .with(|s| s.current_tenant().map(|t| t.nome.clone()).unwrap_or_default())
    };

    view! {
        <PageFrame page_id=page_id("painel", PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{greeting}</h1>
                    <span class="badge badge--neutral">{perfil}</span>
                </div>
                <div class="page__header-right">
                    <span>{tenant}</span>
                    <TenantSelect />
                </div>
            </div>

            <div class="page__content">
                {menu_groups().into_iter().map(|group| view! {
                    <div class="details-section">
                        <h4 class="details-section__title">{group.label}</h4>
                        <div class="dashboard-shortcuts">
                            {group.items.into_iter().map(|(route, icon_name)| view! {
                                <button class="card dashboard-shortcuts__item" on:click=move |_| ctx.open(route)>
                                    {icon(icon_name)}
                                    <span>{route.title()}</span>
                                </button>
                            }).collect_view()}
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </PageFrame>
    }
}
