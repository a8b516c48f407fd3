use std::sync::Arc;

use contracts::domain::common::EntityRecord;
use leptos::prelude::*;
use thaw::*;

use super::ui::badge::variant_class;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, highlight_matches};

/// Rendered content of one cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    /// Text where the search term is highlighted
    Searchable(String),
    Badge { label: String, variant: &'static str },
}

pub type CellRenderer<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub numeric: bool,
    pub min_width: f64,
    pub render: CellRenderer<T>,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, label: &'static str, render: impl Fn(&T) -> CellValue + Send + Sync + 'static) -> Self {
        Self {
            key,
            label,
            sortable: false,
            numeric: false,
            min_width: 110.0,
            render: Arc::new(render),
        }
    }

    pub fn text(key: &'static str, label: &'static str, render: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self::new(key, label, move |row| CellValue::Text(render(row)))
    }

    pub fn searchable(key: &'static str, label: &'static str, render: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self::new(key, label, move |row| CellValue::Searchable(render(row)))
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = width;
        self
    }
}

impl<T: EntityRecord> Column<T> {
    /// Ativo / Inativo badge
    pub fn status() -> Self {
        Self::new("ativo", "Situação", |row: &T| CellValue::Badge {
            label: if row.ativo() { "Ativo" } else { "Inativo" }.to_string(),
            variant: if row.ativo() { "success" } else { "neutral" },
        })
        .min_width(90.0)
    }
}

/// Button shown at the end of each row
pub struct RowAction<T> {
    pub label: &'static str,
    pub icon: &'static str,
    pub danger: bool,
    pub run: Arc<dyn Fn(&T) + Send + Sync>,
}

impl<T> RowAction<T> {
    pub fn new(label: &'static str, icon: &'static str, run: impl Fn(&T) + Send + Sync + 'static) -> Self {
        Self { label, icon, danger: false, run: Arc::new(run) }
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }
}

fn render_cell(cell: CellValue, search: Signal<String>) -> AnyView {
    match cell {
        CellValue::Text(text) => view! { <span>{text}</span> }.into_any(),
        CellValue::Searchable(text) => view! { <span>{move || highlight_matches(&text, &search.get())}</span> }.into_any(),
        CellValue::Badge { label, variant } => {
            view! { <span class=format!("badge {}", variant_class(variant))>{label}</span> }.into_any()
        }
    }
}

/// Table of records with sortable headers and row actions
#[component]
pub fn EntityTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    #[prop(optional)] actions: Vec<RowAction<T>>,
    #[prop(into)] sort_by: Signal<String>,
    on_sort: Callback<String>,
    #[prop(optional, into)] search: MaybeProp<String>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional, into)] table_id: String,
) -> impl IntoView
where
    T: EntityRecord + Clone + Send + Sync + 'static,
{
    let search = Signal::derive(move || search.get().unwrap_or_default());
    let has_actions = !actions.is_empty();
    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);

    let header = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let key = col.key;
                let label = col.label;
                let min_width = col.min_width;
                if col.sortable {
                    view! {
                        <TableHeaderCell resizable=false min_width=min_width class="resizable">
                            <div
                                class="table__sortable-header"
                                style="cursor: pointer;"
                                on:click=move |_| on_sort.run(key.to_string())
                            >
                                {label}
                                <span class=move || get_sort_class(&sort_by.get(), key)>
                                    {move || get_sort_indicator(&sort_by.get(), key)}
                                </span>
                            </div>
                        </TableHeaderCell>
                    }
                    .into_any()
                } else {
                    view! {
                        <TableHeaderCell resizable=false min_width=min_width class="resizable">
                            {label}
                        </TableHeaderCell>
                    }
                    .into_any()
                }
            })
            .collect_view()
    });

    let render_row = move |row: T| {
        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|col| (col.numeric, (col.render)(&row)))
                .collect::<Vec<_>>()
        });
        let buttons = actions.with_value(|acts| {
            acts.iter()
                .map(|action| {
                    let run = action.run.clone();
                    let row = row.clone();
                    let class = if action.danger {
                        "button button--icon button--danger"
                    } else {
                        "button button--icon"
                    };
                    view! {
                        <button class=class title=action.label on:click=move |_| run(&row)>
                            {icon(action.icon)}
                        </button>
                    }
                })
                .collect_view()
        });
        view! {
            <TableRow>
                {cells
                    .into_iter()
                    .map(|(numeric, cell)| {
                        let style = if numeric { "font-variant-numeric: tabular-nums; text-align: right;" } else { "" };
                        view! {
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    <div style=style>{render_cell(cell, search)}</div>
                                </TableCellLayout>
                            </TableCell>
                        }
                    })
                    .collect_view()}
                {has_actions.then(|| view! {
                    <TableCell>
                        <div class="table__actions">{buttons}</div>
                    </TableCell>
                })}
            </TableRow>
        }
    };

    view! {
        <div class="table-wrapper">
            <Table attr:id=table_id attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {header}
                        {has_actions.then(|| view! {
                            <TableHeaderCell resizable=false min_width=90.0>"Ações"</TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || rows.get().into_iter().map(render_row).collect_view()}
                </TableBody>
            </Table>
            <Show when=move || rows.with(Vec::is_empty)>
                <div class="table__empty">
                    {move || if loading.get() { "Carregando..." } else { "Nenhum registro encontrado." }}
                </div>
            </Show>
        </div>
    }
}
