use crate::layout::global_context::use_global_context;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    // Reads the URL once and keeps it in sync from now on
    use_global_context().init_router_integration();

    view! { <Shell /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
