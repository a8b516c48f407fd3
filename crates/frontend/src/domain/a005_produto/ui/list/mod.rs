use contracts::domain::a005_produto::aggregate::Produto;
use leptos::prelude::*;

use crate::domain::a005_produto::{fields, perecivel_options, Produtos};
use crate::shared::components::{
    CellValue, Column, EntityListPage, FilterSpec, ListPageConfig, SelectFilter,
};
use crate::shared::list::controller::CrudController;
use crate::shared::list::lookup::or_dash;

#[component]
#[allow(non_snake_case)]
pub fn ProdutoList() -> impl IntoView {
    let controller = CrudController::<Produtos>::new(fields());
    let list = controller.list;

    let columns = vec![
        Column::searchable("nome", "Nome", |p: &Produto| p.nome.clone())
            .sortable()
            .min_width(220.0),
        Column::searchable("categoria", "Categoria", |p: &Produto| or_dash(&p.categoria)).sortable(),
        Column::text("unidade", "Unidade", |p: &Produto| or_dash(&p.unidade)).min_width(80.0),
        Column::new("perecivel", "Perecível", |p: &Produto| CellValue::Badge {
            label: if p.perecivel { "Sim" } else { "Não" }.to_string(),
            variant: if p.perecivel { "warning" } else { "neutral" },
        })
        .min_width(90.0),
        Column::status(),
    ];
    let filters = FilterSpec {
        search_placeholder: "Nome, descrição ou categoria...",
        status: true,
        selects: vec![
            SelectFilter::new("categoria", "Categoria", list.distinct("categoria")),
            SelectFilter::new("perecivel", "Perecível", perecivel_options()),
        ],
        sort_options: vec![("", "Nome"), ("categoria", "Categoria")],
        ..FilterSpec::default()
    };

    view! { <EntityListPage controller=controller config=ListPageConfig::new(columns, filters) /> }
}
