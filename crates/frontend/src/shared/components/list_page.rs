//! Generic list page: header, filter panel, table and CRUD dialogs.
//!
//! Entity pages only declare their columns and filters in a
//! [`ListPageConfig`]; fetching, filtering, pagination and dialog state live in
//! [`ListController`] / [`CrudController`].

use contracts::domain::common::EntityRecord;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use super::crud_dialog::FormDialog;
use super::delete_dialog::DeleteDialog;
use super::entity_table::{Column, EntityTable, RowAction};
use super::error_alert::ErrorAlert;
use super::filter_panel::{FilterFields, FilterPanel, FilterSpec};
use super::pagination_controls::PaginationControls;
use super::ui::badge::Badge;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::list::controller::{CrudController, ListController};
use crate::shared::list::query::QueryState;
use crate::shared::list::resource::{CrudResource, ListResource};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

pub struct ListPageConfig<T> {
    pub columns: Vec<Column<T>>,
    pub filters: FilterSpec,
    pub actions: Vec<RowAction<T>>,
    /// URL parameter that seeds the categorical filter with the same key
    pub seed: Option<&'static str>,
    /// Rendered between the filter panel and the table
    pub summary: Option<ChildrenFn>,
}

impl<T> ListPageConfig<T> {
    pub fn new(columns: Vec<Column<T>>, filters: FilterSpec) -> Self {
        Self {
            columns,
            filters,
            actions: Vec::new(),
            seed: None,
            summary: None,
        }
    }

    pub fn action(mut self, action: RowAction<T>) -> Self {
        self.actions.push(action);
        self
    }

    pub fn seed(mut self, key: &'static str) -> Self {
        self.seed = Some(key);
        self
    }

    pub fn summary(mut self, summary: ChildrenFn) -> Self {
        self.summary = Some(summary);
        self
    }
}

/// Read-only list page
#[component]
pub fn ListSection<R: ListResource>(
    list: ListController<R>,
    config: ListPageConfig<R::Item>,
    #[prop(default = None)] header_actions: Option<ChildrenFn>,
    /// Loads auxiliary collections alongside the primary fetch
    #[prop(default = None)]
    on_load: Option<Callback<()>>,
) -> impl IntoView {
    let ListPageConfig {
        columns,
        filters,
        actions,
        seed,
        summary,
    } = config;

    if let Some(key) = seed {
        if let Some(value) = use_global_context().param(key) {
            log::debug!("{}: filtro {}={} da URL", R::Item::full_name(), key, value);
            list.view.update(|v| v.seed_filter(key, &value));
        }
    }

    let reload = move || {
        list.fetch();
        if let Some(load) = on_load {
            load.run(());
        }
    };
    reload();

    let state = list.view;
    let loading = list.loading();
    let total = list.total();
    let filters_state = list.filters();
    let sort_field = R::default_sort();
    let sort_by = Signal::derive(move || {
        filters_state
            .get()
            .sort_by
            .unwrap_or_else(|| sort_field.to_string())
    });
    let search = Signal::derive(move || state.with(|s| s.filters.search.clone()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.filters.active_count()));
    let pagination = Signal::derive(move || state.with(|s| s.pagination));

    view! {
        <PageFrame page_id=page_id(&R::Item::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{R::Item::list_name()}</h1>
                    <Badge variant="primary".to_string()>
                        {move || total.get().to_string()}
                    </Badge>
                </div>

                <div class="page__header-right">
                    {header_actions.as_ref().map(|actions| actions())}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Carregando..." } else { " Atualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=Signal::derive(move || state.with(|s| s.filters_expanded))
                    on_toggle=Callback::new(move |_| state.update(|s| s.filters_expanded = !s.filters_expanded))
                    active_filters_count=active_filters_count
                    on_clear=Callback::new(move |_| state.update(|s| s.clear_filters()))
                    pagination_controls=Arc::new(move || view! {
                        <PaginationControls
                            pagination=pagination
                            total_count=total
                            on_page_change=Callback::new(move |page: usize| {
                                state.update(|s| s.pagination.set_page(page, total.get_untracked()))
                            })
                            on_page_size_change=Callback::new(move |rows: usize| {
                                state.update(|s| s.set_rows_per_page(rows))
                            })
                            page_size_options=crate::shared::config::config().rows_per_page_options.clone()
                        />
                    }.into_any())
                    filter_content=Arc::new(move || view! {
                        <FilterFields spec=filters.clone() state=state />
                    }.into_any())
                />

                <ErrorAlert
                    message=list.error()
                    on_retry=Callback::new(move |_| reload())
                    on_dismiss=Callback::new(move |_| list.query.update(QueryState::dismiss_error))
                />

                {summary.as_ref().map(|summary| summary())}

                <div class="table-wrapper">
                    <EntityTable
                        rows=list.visible()
                        columns=columns
                        actions=actions
                        sort_by=sort_by
                        on_sort=Callback::new(move |key: String| state.update(|s| s.set_sort(&key)))
                        search=search
                        loading=loading
                        table_id=format!("{}-table", R::Item::full_name())
                    />
                </div>
            </div>
        </PageFrame>
    }
}

/// List page with "Novo", row edit/delete actions and their dialogs
#[component]
pub fn EntityListPage<R: CrudResource>(
    controller: CrudController<R>,
    config: ListPageConfig<R::Item>,
    #[prop(default = None)] on_load: Option<Callback<()>>,
) -> impl IntoView {
    let mut config = config;
    let mut actions = vec![
        RowAction::new("Editar", "edit", move |item: &R::Item| controller.open_edit(item)),
        RowAction::new("Excluir", "delete", move |item: &R::Item| controller.request_delete(item)).danger(),
    ];
    actions.append(&mut config.actions);
    config.actions = actions;

    let header_actions: ChildrenFn = Arc::new(move || {
        view! {
            <Button appearance=ButtonAppearance::Primary on_click=move |_| controller.open_create()>
                {icon("plus")}
                {format!(" Novo {}", R::Item::element_name())}
            </Button>
        }
        .into_any()
    });

    view! {
        <ListSection
            list=controller.list
            config=config
            header_actions=Some(header_actions)
            on_load=on_load
        />
        <FormDialog
            dialog=controller.dialog
            fields=controller.fields
            element_name=R::Item::element_name()
            on_submit=Callback::new(move |_| controller.submit())
        />
        <DeleteDialog
            delete=controller.delete
            on_confirm=Callback::new(move |_| controller.confirm_delete())
        />
    }
}
