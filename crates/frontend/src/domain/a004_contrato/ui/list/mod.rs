use contracts::domain::a004_contrato::aggregate::Contrato;
use leptos::prelude::*;

use crate::domain::a003_fornecedor::ui::list::FORNECEDOR_PARAM;
use crate::domain::a003_fornecedor::Fornecedores;
use crate::domain::a004_contrato::{fields, vigencia, vigencia_label, vigencia_options, Contratos};
use crate::layout::global_context::{use_global_context, PageRoute};
use crate::shared::components::{
    CellValue, Column, EntityListPage, FilterSpec, ListPageConfig, RowAction, SelectFilter,
};
use crate::shared::date_utils::{format_naive, today};
use crate::shared::list::controller::{CrudController, ListController};
use crate::shared::list::lookup::NO_VALUE;
use crate::shared::number_format::format_brl;

fn vigencia_cell(c: &Contrato) -> CellValue {
    let key = vigencia(c, today());
    let variant = match key {
        "vigente" => "success",
        "futuro" => "primary",
        _ => "neutral",
    };
    CellValue::Badge {
        label: vigencia_label(key).to_string(),
        variant,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ContratoList() -> impl IntoView {
    let ctx = use_global_context();
    let fornecedores = ListController::<Fornecedores>::new();
    let fornecedor_lookup = fornecedores.lookup();
    let controller = CrudController::<Contratos>::new(fields(fornecedores.record_options()));

    let columns = vec![
        Column::searchable("numero", "Número", |c: &Contrato| c.numero.clone())
            .sortable()
            .min_width(120.0),
        Column::text("fornecedor_id", "Fornecedor", move |c: &Contrato| {
            fornecedor_lookup.with(|lookup| lookup.label_of(c.fornecedor_id))
        })
        .min_width(220.0),
        Column::text("data_inicio", "Início", |c: &Contrato| format_naive(c.data_inicio)).sortable(),
        Column::text("data_fim", "Término", |c: &Contrato| format_naive(c.data_fim)).sortable(),
        Column::text("valor_total", "Valor total", |c: &Contrato| {
            c.valor_total.map(format_brl).unwrap_or_else(|| NO_VALUE.to_string())
        })
        .sortable()
        .numeric(),
        Column::new("vigencia", "Vigência", vigencia_cell),
        Column::status(),
    ];
    let filters = FilterSpec {
        search_placeholder: "Número do contrato...",
        status: true,
        selects: vec![
            SelectFilter::new(FORNECEDOR_PARAM, "Fornecedor", fornecedores.record_options()),
            SelectFilter::new("vigencia", "Vigência", vigencia_options()),
        ],
        sort_options: vec![("", "Número"), ("data_inicio", "Início"), ("data_fim", "Término")],
        ..FilterSpec::default()
    };
    let config = ListPageConfig::new(columns, filters)
        .seed(FORNECEDOR_PARAM)
        .action(RowAction::new("Detalhes", "eye", move |c: &Contrato| {
            ctx.open(PageRoute::ContratoDetalhe(c.id))
        }));

    view! {
        <EntityListPage
            controller=controller
            config=config
            on_load=Some(Callback::new(move |_| fornecedores.fetch()))
        />
    }
}
