//! State and commands of the escola details page

use std::sync::Arc;

use contracts::domain::a001_escola::aggregate::{Escola, EscolaModalidade};
use contracts::domain::common::{EntityId, EntityRecord};
use leptos::prelude::*;

use super::model::{self, matriculas_path, EscolaBundle};
use crate::domain::a001_escola::{fields, matricula_fields, EscolaForm, Escolas, MatriculaForm};
use crate::shared::list::controller::{confirm_delete_with, submit_dialog, DetailController};
use crate::shared::list::dialog::{CrudDialog, DeleteConfirm, DialogMode};
use crate::shared::list::form::{validate_required, FormField, OptionsFn};
use crate::shared::list::resource::CrudResource;

#[derive(Clone, Copy)]
pub struct EscolaDetailsVm {
    pub detail: DetailController<EscolaBundle>,
    /// Inline edit of the escola itself
    pub edit: RwSignal<CrudDialog<EscolaForm>>,
    pub edit_fields: StoredValue<Vec<FormField<EscolaForm>>>,
    pub matricula: RwSignal<CrudDialog<MatriculaForm>>,
    pub matricula_fields: StoredValue<Vec<FormField<MatriculaForm>>>,
    pub remove: RwSignal<DeleteConfirm>,
}

impl EscolaDetailsVm {
    pub fn new(id: EntityId) -> Self {
        let detail = DetailController::new(id, model::load, model::LOAD_ERROR);
        let query = detail.query;
        let rotas: OptionsFn = Arc::new(move || {
            query.with(|q| q.data().as_ref().map(|b| b.rotas.options()).unwrap_or_default())
        });
        let modalidades: OptionsFn = Arc::new(move || {
            query.with(|q| q.data().as_ref().map(|b| b.modalidades.options()).unwrap_or_default())
        });
        Self {
            detail,
            edit: RwSignal::new(CrudDialog::default()),
            edit_fields: StoredValue::new(fields(rotas)),
            matricula: RwSignal::new(CrudDialog::default()),
            matricula_fields: StoredValue::new(matricula_fields(modalidades)),
            remove: RwSignal::new(DeleteConfirm::default()),
        }
    }

    pub fn escola(&self) -> Signal<Option<Escola>> {
        let query = self.detail.query;
        Signal::derive(move || query.with(|q| q.data().as_ref().map(|b| b.escola.clone())))
    }

    // ========================================================================
    // Escola
    // ========================================================================

    pub fn start_edit(&self) {
        let Some(escola) = self.escola().get_untracked() else {
            return;
        };
        let form = Escolas::form_from(&escola);
        self.edit.update(|d| d.open_edit(escola.id, form));
    }

    pub fn cancel_edit(&self) {
        self.edit.update(CrudDialog::close);
    }

    pub fn save(&self) {
        let this = *self;
        let client = this.detail.client();
        let id = this.detail.id;
        submit_dialog(
            this.edit,
            move |form| {
                this.edit_fields
                    .try_with_value(|f| validate_required(form, f))
                    .unwrap_or(Ok(()))?;
                Escolas::to_payload(form)
            },
            move |_, payload| async move { client.editar(&Escola::api_path(), id, &payload).await },
            move || {
                log::info!("escola #{} salva", id);
                this.detail.reload();
            },
        );
    }

    // ========================================================================
    // Modalidades atendidas
    // ========================================================================

    pub fn open_add_matricula(&self) {
        self.matricula.update(CrudDialog::open_create);
    }

    pub fn open_edit_matricula(&self, m: &EscolaModalidade) {
        let form = MatriculaForm::from_record(m);
        self.matricula.update(|d| d.open_edit(m.id, form));
    }

    pub fn save_matricula(&self) {
        let this = *self;
        let client = this.detail.client();
        let path = matriculas_path(this.detail.id);
        submit_dialog(
            this.matricula,
            move |form| {
                this.matricula_fields
                    .try_with_value(|f| validate_required(form, f))
                    .unwrap_or(Ok(()))?;
                form.to_payload()
            },
            move |mode, payload| async move {
                match mode {
                    DialogMode::Create => client.criar(&path, &payload).await,
                    DialogMode::Edit(id) => client.editar(&path, id, &payload).await,
                }
            },
            move || this.detail.reload(),
        );
    }

    pub fn request_remove_matricula(&self, m: &EscolaModalidade, label: String) {
        self.remove.update(|d| d.request(m.id, label));
    }

    pub fn confirm_remove_matricula(&self) {
        let this = *self;
        let client = this.detail.client();
        let path = matriculas_path(this.detail.id);
        confirm_delete_with(
            this.remove,
            move |request| async move { client.remover(&path, request.id, request.force).await },
            move || this.detail.reload(),
        );
    }
}
