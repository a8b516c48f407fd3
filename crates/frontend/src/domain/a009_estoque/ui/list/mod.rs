use contracts::domain::a009_estoque::aggregate::EstoqueItem;
use leptos::prelude::*;
use std::sync::Arc;

use crate::domain::a009_estoque::{
    contar_situacoes, prazo_label, situacao_hoje, situacao_options, situacao_variant, Estoque,
};
use crate::shared::components::ui::badge::variant_class;
use crate::shared::components::{CellValue, Column, FilterSpec, ListPageConfig, ListSection, SelectFilter};
use crate::shared::config::config;
use crate::shared::date_utils::{format_opt, today};
use crate::shared::list::controller::ListController;
use crate::shared::list::lookup::{or_dash, NO_VALUE};
use crate::shared::number_format::format_quantity;

fn with_unidade(value: f64, unidade: &Option<String>) -> String {
    match unidade.as_deref() {
        Some(u) if !u.is_empty() => format!("{} {}", format_quantity(value), u),
        _ => format_quantity(value),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EstoqueList() -> impl IntoView {
    let list = ListController::<Estoque>::new();
    let counts = Memo::new(move |_| {
        list.query
            .with(|q| contar_situacoes(q.data(), today(), config().expiry_warning_days))
    });

    let columns = vec![
        Column::searchable("produto_nome", "Produto", |e: &EstoqueItem| or_dash(&e.produto_nome))
            .sortable()
            .min_width(220.0),
        Column::searchable("lote", "Lote", |e: &EstoqueItem| or_dash(&e.lote)),
        Column::text("quantidade", "Quantidade", |e: &EstoqueItem| with_unidade(e.quantidade, &e.unidade))
            .sortable()
            .numeric(),
        Column::text("estoque_minimo", "Mínimo", |e: &EstoqueItem| {
            e.estoque_minimo
                .map(|m| with_unidade(m, &e.unidade))
                .unwrap_or_else(|| NO_VALUE.to_string())
        })
        .numeric(),
        Column::text("data_validade", "Validade", |e: &EstoqueItem| format_opt(e.data_validade)).sortable(),
        Column::text("prazo", "Prazo", |e: &EstoqueItem| prazo_label(e.dias_para_vencer(today()))),
        Column::new("situacao", "Situação", |e: &EstoqueItem| {
            let situacao = situacao_hoje(e);
            CellValue::Badge {
                label: situacao.label().to_string(),
                variant: situacao_variant(situacao),
            }
        }),
    ];
    let filters = FilterSpec {
        search_placeholder: "Produto ou lote...",
        selects: vec![
            SelectFilter::new("situacao", "Situação", situacao_options()),
            SelectFilter::new("unidade", "Unidade", list.distinct("unidade")),
        ],
        sort_options: vec![
            ("", "Situação"),
            ("produto_nome", "Produto"),
            ("data_validade", "Validade"),
            ("quantidade", "Quantidade"),
        ],
        ..FilterSpec::default()
    };

    let summary: ChildrenFn = Arc::new(move || {
        view! {
            <div class="stock-alerts">
                {move || counts.get().into_iter().map(|(situacao, total)| {
                    let class = format!("card stock-alerts__item {}", variant_class(situacao_variant(situacao)));
                    view! {
                        <button
                            class=class
                            title="Filtrar por situação"
                            on:click=move |_| list.update_filters(|f| f.set_selected("situacao", situacao.key().to_string()))
                        >
                            <span class="stock-alerts__count">{total}</span>
                            <span class="stock-alerts__label">{situacao.label()}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        }
        .into_any()
    });

    view! { <ListSection list=list config=ListPageConfig::new(columns, filters).summary(summary) /> }
}
