use leptos::prelude::*;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Renders the children only for an authenticated session
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_auth();

    view! {
        <Show when=move || session.is_authenticated() fallback=|| view! { <LoginPage /> }>
            {children()}
        </Show>
    }
}
