use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overlay dialog with a title bar, body and optional footer
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    /// Called when the modal should close (overlay click or close button)
    on_close: Callback<()>,
    /// While false the overlay and the close button are inert
    #[prop(optional, into)]
    closable: MaybeProp<bool>,
    #[prop(optional)] footer: Option<ChildrenFn>,
    #[prop(optional, into)] modal_class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let can_close = move || closable.get().unwrap_or(true);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Closing needs both press and release on the overlay itself,
    // so a text selection that ends outside the dialog keeps it open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let request_close = move || {
        if !can_close() {
            return;
        }
        // deferred: the overlay must not be removed during its own click dispatch
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let direct = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if direct {
            request_close();
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let surface_class = move || match modal_class.get() {
        Some(extra) if !extra.is_empty() => format!("modal {}", extra),
        _ => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <div class="modal-header-actions">
                        <button
                            class="button button--icon modal__close"
                            on:click=move |_| request_close()
                            disabled=move || !can_close()
                            title="Fechar"
                        >
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">{children()}</div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer()}</div> })}
            </div>
        </div>
    }
}
