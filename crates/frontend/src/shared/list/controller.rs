//! Reactive controllers binding the list core to Leptos signals

use std::future::Future;
use std::marker::PhantomData;

use contracts::domain::common::{EntityId, EntityRecord};
use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

use super::dialog::{CrudDialog, DeleteConfirm, DeleteRequest, DialogMode};
use super::filter::{apply_filters, distinct_tags, distinct_values, FilterState};
use super::form::{validate_required, FormField, OptionsFn};
use super::lookup::LookupTable;
use super::query::QueryState;
use super::resource::{CrudResource, ListResource};
use super::ListState;
use crate::shared::config::config;
use crate::shared::http::{ApiClient, ApiError};
use crate::system::auth::context::{use_auth, SessionHandle};

pub const SAVE_ERROR: &str = "Erro ao salvar. Verifique os dados e tente novamente.";
pub const DELETE_ERROR: &str = "Erro ao excluir. Tente novamente.";

/// Collection state of one list page
pub struct ListController<R: ListResource> {
    pub query: RwSignal<QueryState<Vec<R::Item>>>,
    pub view: RwSignal<ListState>,
    pub filtered: Memo<Vec<R::Item>>,
    session: SessionHandle,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ListResource> Clone for ListController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListResource> Copy for ListController<R> {}

impl<R: ListResource> ListController<R> {
    pub fn new() -> Self {
        let query: RwSignal<QueryState<Vec<R::Item>>> = RwSignal::new(QueryState::default());
        let view = RwSignal::new(ListState::new(config().default_rows_per_page));
        let filtered = Memo::new(move |_| {
            view.with(|v| query.with(|q| apply_filters(q.data(), &v.filters, R::default_sort())))
        });
        Self {
            query,
            view,
            filtered,
            session: use_auth(),
            _resource: PhantomData,
        }
    }

    pub fn client(&self) -> ApiClient {
        self.session.client()
    }

    /// Loads the whole collection; the latest response replaces the data
    pub fn fetch(&self) {
        let this = *self;
        let path = R::path();
        let client = this.client();
        this.query.update(QueryState::begin);
        log::debug!("GET {}", path);
        spawn_local(async move {
            match client.listar::<R::Item>(&path).await {
                Ok(items) => {
                    log::debug!("GET {}: {} registros", path, items.len());
                    this.query.try_update(|q| q.succeed(items));
                    this.clamp_page();
                }
                Err(e) => {
                    log::warn!("GET {} failed: {}", path, e);
                    this.query.try_update(|q| q.fail(R::load_error()));
                }
            }
        });
    }

    fn clamp_page(&self) {
        let total = self.filtered.try_with_untracked(Vec::len).unwrap_or(0);
        self.view.try_update(|v| v.pagination.clamp(total));
    }

    pub fn visible(&self) -> Signal<Vec<R::Item>> {
        let this = *self;
        Signal::derive(move || {
            this.filtered
                .with(|items| this.view.with(|v| v.pagination.slice(items).to_vec()))
        })
    }

    pub fn total(&self) -> Signal<usize> {
        let filtered = self.filtered;
        Signal::derive(move || filtered.with(Vec::len))
    }

    pub fn loading(&self) -> Signal<bool> {
        let query = self.query;
        Signal::derive(move || query.with(QueryState::loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.error().map(String::from)))
    }

    pub fn filters(&self) -> Signal<FilterState> {
        let view = self.view;
        Signal::derive(move || view.with(|v| v.filters.clone()))
    }

    pub fn update_filters(&self, change: impl FnOnce(&mut FilterState)) {
        self.view.update(|v| v.update_filters(change));
    }

    /// Id index rebuilt on every load
    pub fn lookup(&self) -> Memo<LookupTable<R::Item>> {
        let query = self.query;
        Memo::new(move |_| query.with(|q| LookupTable::build(q.data())))
    }

    /// Dropdown options from the distinct values of a field
    pub fn distinct(&self, key: &'static str) -> OptionsFn {
        let query = self.query;
        Arc::new(move || {
            query
                .with(|q| distinct_values(q.data(), key))
                .into_iter()
                .map(|v| (v.clone(), v))
                .collect()
        })
    }

    pub fn distinct_tags(&self, key: &'static str) -> OptionsFn {
        let query = self.query;
        Arc::new(move || {
            query
                .with(|q| distinct_tags(q.data(), key))
                .into_iter()
                .map(|v| (v.clone(), v))
                .collect()
        })
    }

    /// Select options `(id, label)` from the loaded records
    pub fn record_options(&self) -> OptionsFn {
        let lookup = self.lookup();
        Arc::new(move || lookup.with(LookupTable::options))
    }
}

impl<R: ListResource> Default for ListController<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// List page with create/edit dialog and delete confirmation
pub struct CrudController<R: CrudResource> {
    pub list: ListController<R>,
    pub dialog: RwSignal<CrudDialog<R::Form>>,
    pub delete: RwSignal<DeleteConfirm>,
    pub fields: StoredValue<Vec<FormField<R::Form>>>,
}

impl<R: CrudResource> Clone for CrudController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: CrudResource> Copy for CrudController<R> {}

impl<R: CrudResource> CrudController<R> {
    pub fn new(fields: Vec<FormField<R::Form>>) -> Self {
        Self {
            list: ListController::new(),
            dialog: RwSignal::new(CrudDialog::default()),
            delete: RwSignal::new(DeleteConfirm::default()),
            fields: StoredValue::new(fields),
        }
    }

    pub fn open_create(&self) {
        self.dialog.update(CrudDialog::open_create);
    }

    pub fn open_edit(&self, item: &R::Item) {
        let id = item.id();
        let form = R::form_from(item);
        self.dialog.update(|d| d.open_edit(id, form));
    }

    pub fn close_dialog(&self) {
        self.dialog.update(CrudDialog::close);
    }

    pub fn submit(&self) {
        let this = *self;
        let path = R::path();
        let client = this.list.client();
        submit_dialog(
            this.dialog,
            move |form| check_form::<R>(form, this.fields),
            move |mode, payload| async move {
                match mode {
                    DialogMode::Create => client.criar(&path, &payload).await,
                    DialogMode::Edit(id) => client.editar(&path, id, &payload).await,
                }
            },
            move || {
                log::info!("{} salvo", R::Item::element_name());
                this.list.fetch();
            },
        );
    }

    pub fn request_delete(&self, item: &R::Item) {
        let id = item.id();
        let label = item.label();
        self.delete.update(|d| d.request(id, label));
    }

    pub fn confirm_delete(&self) {
        let this = *self;
        let path = R::path();
        let client = this.list.client();
        confirm_delete_with(
            this.delete,
            move |request| async move { client.remover(&path, request.id, request.force).await },
            move || {
                log::info!("{} excluído", R::Item::element_name());
                this.list.fetch();
            },
        );
    }
}

fn check_form<R: CrudResource>(
    form: &R::Form,
    fields: StoredValue<Vec<FormField<R::Form>>>,
) -> Result<R::Payload, String> {
    fields
        .try_with_value(|fields| validate_required(form, fields))
        .unwrap_or(Ok(()))?;
    R::to_payload(form)
}

/// Validates, sends and settles one dialog submission
pub fn submit_dialog<F, P, Fut>(
    dialog: RwSignal<CrudDialog<F>>,
    check: impl FnOnce(&F) -> Result<P, String>,
    send: impl FnOnce(DialogMode, P) -> Fut + 'static,
    on_success: impl FnOnce() + 'static,
) where
    F: Clone + Default + Send + Sync + 'static,
    P: 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let Some(submission) = dialog.try_update(|d| d.begin_submit(check)).flatten() else {
        return;
    };
    spawn_local(async move {
        match send(submission.mode, submission.payload).await {
            Ok(()) => {
                dialog.try_update(CrudDialog::submit_succeeded);
                on_success();
            }
            Err(e) => {
                log::warn!("save failed: {}", e);
                dialog.try_update(|d| d.submit_failed(e.user_message(SAVE_ERROR)));
            }
        }
    });
}

/// Sends an accepted delete; dependency payloads switch the dialog to blocked
pub fn confirm_delete_with<Fut>(
    delete: RwSignal<DeleteConfirm>,
    send: impl FnOnce(DeleteRequest) -> Fut + 'static,
    on_success: impl FnOnce() + 'static,
) where
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let Some(request) = delete.try_update(DeleteConfirm::begin).flatten() else {
        return;
    };
    spawn_local(async move {
        match send(request).await {
            Ok(()) => {
                delete.try_update(DeleteConfirm::succeed);
                on_success();
            }
            Err(e) => {
                log::warn!("delete #{} failed: {}", request.id, e);
                let dependencies = e.dependencies();
                delete.try_update(|d| d.fail(e.user_message(DELETE_ERROR), dependencies));
            }
        }
    });
}

pub type Loader<B> = fn(ApiClient, EntityId) -> LocalBoxFuture<'static, Result<B, ApiError>>;

/// One record plus its related collections
pub struct DetailController<B: Clone + Send + Sync + 'static> {
    pub id: EntityId,
    pub query: RwSignal<QueryState<Option<B>>>,
    session: SessionHandle,
    loader: Loader<B>,
    load_error: &'static str,
}

impl<B: Clone + Send + Sync + 'static> Clone for DetailController<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Clone + Send + Sync + 'static> Copy for DetailController<B> {}

impl<B: Clone + Send + Sync + 'static> DetailController<B> {
    pub fn new(id: EntityId, loader: Loader<B>, load_error: &'static str) -> Self {
        Self {
            id,
            query: RwSignal::new(QueryState::default()),
            session: use_auth(),
            loader,
            load_error,
        }
    }

    pub fn client(&self) -> ApiClient {
        self.session.client()
    }

    pub fn reload(&self) {
        let this = *self;
        let future = (this.loader)(this.client(), this.id);
        this.query.update(QueryState::begin);
        log::debug!("loading detail #{}", this.id);
        spawn_local(async move {
            match future.await {
                Ok(bundle) => {
                    this.query.try_update(|q| q.succeed(Some(bundle)));
                }
                Err(e) => {
                    log::warn!("detail #{} failed: {}", this.id, e);
                    this.query.try_update(|q| q.fail(e.user_message(this.load_error)));
                }
            }
        });
    }

    pub fn data(&self) -> Signal<Option<B>> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.data().clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let query = self.query;
        Signal::derive(move || query.with(QueryState::loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.error().map(String::from)))
    }
}
