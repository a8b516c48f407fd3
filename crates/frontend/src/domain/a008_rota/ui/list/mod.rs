use contracts::domain::a008_rota::aggregate::Rota;
use leptos::prelude::*;

use crate::domain::a008_rota::{fields, Rotas};
use crate::layout::global_context::{use_global_context, PageRoute};
use crate::shared::components::{Column, EntityListPage, FilterSpec, ListPageConfig, RowAction};
use crate::shared::list::controller::CrudController;
use crate::shared::list::lookup::or_dash;

#[component]
#[allow(non_snake_case)]
pub fn RotaList() -> impl IntoView {
    let ctx = use_global_context();
    let controller = CrudController::<Rotas>::new(fields());

    let columns = vec![
        Column::searchable("nome", "Nome", |r: &Rota| r.nome.clone()).sortable().min_width(200.0),
        Column::searchable("descricao", "Descrição", |r: &Rota| or_dash(&r.descricao)).min_width(260.0),
        Column::status(),
    ];
    let filters = FilterSpec {
        search_placeholder: "Nome ou descrição...",
        status: true,
        ..FilterSpec::default()
    };
    let config = ListPageConfig::new(columns, filters).action(RowAction::new(
        "Escolas da rota",
        "school",
        move |r: &Rota| ctx.open_filtered(PageRoute::Escolas, "rota_id", r.id.to_string()),
    ));

    view! { <EntityListPage controller=controller config=config /> }
}
