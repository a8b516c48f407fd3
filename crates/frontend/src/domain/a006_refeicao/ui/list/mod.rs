use contracts::domain::a006_refeicao::aggregate::Refeicao;
use leptos::prelude::*;

use crate::domain::a006_refeicao::{fields, tipo_label, tipo_options, Refeicoes};
use crate::shared::components::{Column, EntityListPage, FilterSpec, ListPageConfig, SelectFilter};
use crate::shared::list::controller::CrudController;
use crate::shared::list::lookup::or_dash;

#[component]
#[allow(non_snake_case)]
pub fn RefeicaoList() -> impl IntoView {
    let controller = CrudController::<Refeicoes>::new(fields());

    let columns = vec![
        Column::searchable("nome", "Nome", |r: &Refeicao| r.nome.clone())
            .sortable()
            .min_width(220.0),
        Column::text("tipo", "Tipo", |r: &Refeicao| tipo_label(&r.tipo)).sortable(),
        Column::searchable("descricao", "Descrição", |r: &Refeicao| or_dash(&r.descricao)).min_width(260.0),
        Column::status(),
    ];
    let filters = FilterSpec {
        search_placeholder: "Nome ou descrição...",
        status: true,
        selects: vec![SelectFilter::new("tipo", "Tipo", tipo_options())],
        ..FilterSpec::default()
    };

    view! { <EntityListPage controller=controller config=ListPageConfig::new(columns, filters) /> }
}
