use contracts::domain::a007_cardapio::aggregate::Cardapio;
use leptos::prelude::*;

use crate::domain::a002_modalidade::Modalidades;
use crate::domain::a007_cardapio::{fields, Cardapios};
use crate::shared::components::{Column, EntityListPage, FilterSpec, ListPageConfig, SelectFilter};
use crate::shared::date_utils::month_name;
use crate::shared::list::controller::{CrudController, ListController};
use crate::shared::list::lookup::NO_VALUE;

#[component]
#[allow(non_snake_case)]
pub fn CardapioList() -> impl IntoView {
    let modalidades = ListController::<Modalidades>::new();
    let modalidade_lookup = modalidades.lookup();
    let controller = CrudController::<Cardapios>::new(fields(modalidades.record_options()));
    let list = controller.list;

    let columns = vec![
        Column::searchable("nome", "Nome", |c: &Cardapio| c.nome.clone())
            .sortable()
            .min_width(220.0),
        Column::text("competencia", "Competência", |c: &Cardapio| {
            format!("{}/{}", month_name(c.mes), c.ano)
        })
        .sortable(),
        Column::text("modalidades", "Modalidades", move |c: &Cardapio| {
            if c.modalidade_ids.is_empty() {
                return NO_VALUE.to_string();
            }
            modalidade_lookup.with(|lookup| {
                c.modalidade_ids
                    .iter()
                    .map(|id| lookup.label_of(*id))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
        })
        .min_width(220.0),
        Column::status(),
    ];
    let filters = FilterSpec {
        search_placeholder: "Nome ou observação...",
        status: true,
        selects: vec![SelectFilter::new("ano", "Ano", list.distinct("ano"))],
        multi_selects: vec![SelectFilter::new(
            "modalidade_ids",
            "Modalidades",
            modalidades.record_options(),
        )],
        sort_options: vec![("", "Nome"), ("competencia", "Competência")],
    };

    view! {
        <EntityListPage
            controller=controller
            config=ListPageConfig::new(columns, filters)
            on_load=Some(Callback::new(move |_| modalidades.fetch()))
        />
    }
}
