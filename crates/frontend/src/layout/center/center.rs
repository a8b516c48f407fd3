use crate::layout::center::registry::render_page;
use crate::layout::global_context::use_global_context;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

/// Renders the current page
///
/// Pages remount, and so refetch, when the route, its parameters or the
/// selected tenant change.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_auth();

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            {move || {
                let route = ctx.route.get();
                ctx.params.track();
                let tenant = session.state.with(|s| s.current_tenant_id.clone());
                log::debug!("render {} (tenant {:?})", route.key(), tenant);
                render_page(route)
            }}
        </div>
    }
}
