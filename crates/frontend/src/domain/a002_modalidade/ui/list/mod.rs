use contracts::domain::a002_modalidade::aggregate::Modalidade;
use leptos::prelude::*;

use crate::domain::a002_modalidade::{fields, Modalidades};
use crate::shared::components::{Column, EntityListPage, FilterSpec, ListPageConfig};
use crate::shared::list::controller::CrudController;
use crate::shared::list::lookup::or_dash;
use crate::shared::number_format::format_brl;

#[component]
#[allow(non_snake_case)]
pub fn ModalidadeList() -> impl IntoView {
    let controller = CrudController::<Modalidades>::new(fields());

    let columns = vec![
        Column::searchable("nome", "Nome", |m: &Modalidade| m.nome.clone())
            .sortable()
            .min_width(200.0),
        Column::searchable("codigo_financeiro", "Código financeiro", |m: &Modalidade| {
            or_dash(&m.codigo_financeiro)
        }),
        Column::text("valor_repasse", "Valor de repasse", |m: &Modalidade| format_brl(m.valor_repasse))
            .sortable()
            .numeric(),
        Column::status(),
    ];
    let filters = FilterSpec {
        search_placeholder: "Nome ou código...",
        status: true,
        sort_options: vec![("", "Nome"), ("valor_repasse", "Valor de repasse")],
        ..FilterSpec::default()
    };

    view! { <EntityListPage controller=controller config=ListPageConfig::new(columns, filters) /> }
}
