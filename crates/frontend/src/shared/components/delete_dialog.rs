use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use super::error_alert::ErrorAlert;
use crate::shared::list::dialog::DeleteConfirm;
use crate::shared::modal::Modal;

/// Always-confirmed delete; switches to a forced delete when blocked
#[component]
pub fn DeleteDialog(delete: RwSignal<DeleteConfirm>, on_confirm: Callback<()>) -> impl IntoView {
    let processing = Signal::derive(move || delete.with(DeleteConfirm::is_processing));
    let blocked = Signal::derive(move || delete.with(DeleteConfirm::is_blocked));
    let label = move || delete.with(|d| d.target().map(|t| t.label.clone()).unwrap_or_default());
    let error = Signal::derive(move || delete.with(|d| d.error().map(String::from)));
    let close = Callback::new(move |_| delete.update(DeleteConfirm::cancel));

    view! {
        <Show when=move || delete.with(DeleteConfirm::is_open)>
            <Modal
                title="Confirmar exclusão".to_string()
                on_close=close
                closable=Signal::derive(move || !processing.get())
                modal_class="modal--confirm".to_string()
                footer=Arc::new(move || view! {
                    <Flex gap=FlexGap::Small justify=FlexJustify::End>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| close.run(())
                            disabled=processing
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            class="button--danger"
                            on_click=move |_| on_confirm.run(())
                            disabled=Signal::derive(move || !delete.with(DeleteConfirm::confirm_enabled))
                        >
                            {move || {
                                if processing.get() {
                                    "Excluindo..."
                                } else if blocked.get() {
                                    "Excluir mesmo assim"
                                } else {
                                    "Excluir"
                                }
                            }}
                        </Button>
                    </Flex>
                }.into_any())
            >
                <ErrorAlert message=error />
                <Show
                    when=move || blocked.get()
                    fallback=move || view! {
                        <p>"Deseja realmente excluir " <strong>{label}</strong> "?"</p>
                    }
                >
                    <div class="alert alert--warning">
                        <p>
                            <strong>{label}</strong>
                            " não pode ser excluído diretamente. Existem registros vinculados:"
                        </p>
                        <ul class="delete-dialog__dependencies">
                            {move || {
                                delete
                                    .with(DeleteConfirm::dependency_lines)
                                    .into_iter()
                                    .map(|line| view! { <li>{line}</li> })
                                    .collect_view()
                            }}
                        </ul>
                    </div>
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || delete.with(DeleteConfirm::force)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                delete.update(|d| d.set_force(checked));
                            }
                            disabled=move || processing.get()
                        />
                        <span>"Excluir também os registros vinculados"</span>
                    </label>
                </Show>
            </Modal>
        </Show>
    }
}
