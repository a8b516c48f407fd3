use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use super::error_alert::ErrorAlert;
use super::form_fields::FormFields;
use crate::shared::list::dialog::{CrudDialog, DialogMode};
use crate::shared::list::form::FormField;
use crate::shared::modal::Modal;

/// Create/edit dialog for any form type
#[component]
pub fn FormDialog<F>(
    dialog: RwSignal<CrudDialog<F>>,
    fields: StoredValue<Vec<FormField<F>>>,
    /// Singular entity name, e.g. "Escola"
    element_name: &'static str,
    on_submit: Callback<()>,
) -> impl IntoView
where
    F: Clone + Default + Send + Sync + 'static,
{
    let submitting = Signal::derive(move || dialog.with(CrudDialog::is_submitting));
    let title = Signal::derive(move || match dialog.with(CrudDialog::mode) {
        DialogMode::Create => format!("Novo registro: {}", element_name),
        DialogMode::Edit(_) => format!("Editar {}", element_name),
    });
    let error = Signal::derive(move || dialog.with(|d| d.error().map(String::from)));
    let close = Callback::new(move |_| dialog.update(CrudDialog::close));

    view! {
        <Show when=move || dialog.with(CrudDialog::is_open)>
            <Modal
                title=title
                on_close=close
                closable=Signal::derive(move || !submitting.get())
                footer=Arc::new(move || view! {
                    <Flex gap=FlexGap::Small justify=FlexJustify::End>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| close.run(())
                            disabled=submitting
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_submit.run(())
                            disabled=submitting
                        >
                            {move || if submitting.get() { "Salvando..." } else { "Salvar" }}
                        </Button>
                    </Flex>
                }.into_any())
            >
                <ErrorAlert
                    message=error
                    on_dismiss=Callback::new(move |_| dialog.update(CrudDialog::dismiss_error))
                />
                <FormFields fields=fields.get_value() dialog=dialog />
            </Modal>
        </Show>
    }
}
