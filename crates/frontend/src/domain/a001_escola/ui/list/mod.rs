use contracts::domain::a001_escola::aggregate::Escola;
use leptos::prelude::*;

use crate::domain::a001_escola::{administracao_label, administracao_options, fields, Escolas};
use crate::domain::a008_rota::Rotas;
use crate::layout::global_context::{use_global_context, PageRoute};
use crate::shared::components::{
    Column, EntityListPage, FilterSpec, ListPageConfig, RowAction, SelectFilter,
};
use crate::shared::list::controller::{CrudController, ListController};
use crate::shared::list::lookup::or_dash;

#[component]
#[allow(non_snake_case)]
pub fn EscolaList() -> impl IntoView {
    let ctx = use_global_context();
    let rotas = ListController::<Rotas>::new();
    let rota_lookup = rotas.lookup();
    let controller = CrudController::<Escolas>::new(fields(rotas.record_options()));
    let list = controller.list;

    let columns = vec![
        Column::searchable("nome", "Nome", |e: &Escola| e.nome.clone())
            .sortable()
            .min_width(240.0),
        Column::searchable("codigo_inep", "INEP", |e: &Escola| or_dash(&e.codigo_inep)).min_width(100.0),
        Column::searchable("municipio", "Município", |e: &Escola| or_dash(&e.municipio)).sortable(),
        Column::text("rota_id", "Rota", move |e: &Escola| {
            rota_lookup.with(|lookup| lookup.label_of_opt(e.rota_id))
        }),
        Column::text("administracao", "Administração", |e: &Escola| administracao_label(&e.administracao)),
        Column::status(),
    ];
    let filters = FilterSpec {
        search_placeholder: "Nome, INEP, município ou endereço...",
        status: true,
        selects: vec![
            SelectFilter::new("municipio", "Município", list.distinct("municipio")),
            SelectFilter::new("rota_id", "Rota", rotas.record_options()),
            SelectFilter::new("administracao", "Administração", administracao_options()),
        ],
        sort_options: vec![("", "Nome"), ("municipio", "Município"), ("codigo_inep", "INEP")],
        ..FilterSpec::default()
    };
    let config = ListPageConfig::new(columns, filters)
        .seed("rota_id")
        .action(RowAction::new("Detalhes", "eye", move |e: &Escola| {
            ctx.open(PageRoute::EscolaDetalhe(e.id))
        }));

    view! {
        <EntityListPage
            controller=controller
            config=config
            on_load=Some(Callback::new(move |_| rotas.fetch()))
        />
    }
}
