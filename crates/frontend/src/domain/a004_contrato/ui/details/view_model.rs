use std::sync::Arc;

use contracts::domain::a004_contrato::aggregate::{Contrato, ContratoProduto};
use contracts::domain::common::{EntityId, EntityRecord};
use leptos::prelude::*;

use super::model::{self, itens_path, ContratoBundle};
use crate::domain::a004_contrato::{check_contrato, fields, item_fields, ContratoForm, Contratos, ItemForm};
use crate::shared::list::controller::{confirm_delete_with, submit_dialog, DetailController};
use crate::shared::list::dialog::{CrudDialog, DeleteConfirm, DialogMode};
use crate::shared::list::form::{validate_required, FormField, OptionsFn};
use crate::shared::list::resource::CrudResource;

#[derive(Clone, Copy)]
pub struct ContratoDetailsVm {
    pub detail: DetailController<ContratoBundle>,
    /// Inline edit of the contract header
    pub edit: RwSignal<CrudDialog<ContratoForm>>,
    pub edit_fields: StoredValue<Vec<FormField<ContratoForm>>>,
    pub item: RwSignal<CrudDialog<ItemForm>>,
    pub item_fields: StoredValue<Vec<FormField<ItemForm>>>,
    pub remove: RwSignal<DeleteConfirm>,
}

impl ContratoDetailsVm {
    pub fn new(id: EntityId) -> Self {
        let detail = DetailController::new(id, model::load, model::LOAD_ERROR);
        let query = detail.query;
        let produtos: OptionsFn = Arc::new(move || {
            query.with(|q| q.data().as_ref().map(|b| b.produtos.options()).unwrap_or_default())
        });
        let fornecedores: OptionsFn = Arc::new(move || {
            query.with(|q| q.data().as_ref().map(|b| b.fornecedores.options()).unwrap_or_default())
        });
        Self {
            detail,
            edit: RwSignal::new(CrudDialog::default()),
            edit_fields: StoredValue::new(fields(fornecedores)),
            item: RwSignal::new(CrudDialog::default()),
            item_fields: StoredValue::new(item_fields(produtos)),
            remove: RwSignal::new(DeleteConfirm::default()),
        }
    }

    pub fn contrato(&self) -> Signal<Option<Contrato>> {
        let query = self.detail.query;
        Signal::derive(move || query.with(|q| q.data().as_ref().map(|b| b.contrato.clone())))
    }

    pub fn start_edit(&self) {
        let Some(contrato) = self.contrato().get_untracked() else {
            return;
        };
        let form = Contratos::form_from(&contrato);
        self.edit.update(|d| d.open_edit(contrato.id, form));
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
                    .try_with_value(|f| check_contrato(form, f))
                    .unwrap_or_else(|| Contratos::to_payload(form))
            },
            move |_, payload| async move { client.editar(&Contrato::api_path(), id, &payload).await },
            move || {
                log::info!("contrato #{} salvo", id);
                this.detail.reload();
            },
        );
    }

    pub fn open_add_item(&self) {
        self.item.update(CrudDialog::open_create);
    }

    pub fn open_edit_item(&self, item: &ContratoProduto) {
        let form = ItemForm::from_record(item);
        self.item.update(|d| d.open_edit(item.id, form));
    }

    pub fn save_item(&self) {
        let this = *self;
        let client = this.detail.client();
        let path = itens_path(this.detail.id);
        submit_dialog(
            this.item,
            move |form| {
                this.item_fields
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
            move || {
                log::info!("item do contrato #{} salvo", this.detail.id);
                this.detail.reload();
            },
        );
    }

    pub fn request_remove_item(&self, item: &ContratoProduto, label: String) {
        self.remove.update(|d| d.request(item.id, label));
    }

    pub fn confirm_remove_item(&self) {
        let this = *self;
        let client = this.detail.client();
        let path = itens_path(this.detail.id);
        confirm_delete_with(
            this.remove,
            move |request| async move { client.remover(&path, request.id, request.force).await },
            move || this.detail.reload(),
        );
    }
}
