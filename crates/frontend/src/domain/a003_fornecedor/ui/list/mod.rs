use contracts::domain::a003_fornecedor::aggregate::Fornecedor;
use leptos::prelude::*;

use crate::domain::a003_fornecedor::{fields, tipo_label, tipo_options, Fornecedores};
use crate::layout::global_context::{use_global_context, PageRoute};
use crate::shared::components::{
    Column, EntityListPage, FilterSpec, ListPageConfig, RowAction, SelectFilter,
};
use crate::shared::list::controller::CrudController;
use crate::shared::list::lookup::or_dash;

/// Query parameter read by the contracts page
pub const FORNECEDOR_PARAM: &str = "fornecedor_id";

#[component]
#[allow(non_snake_case)]
pub fn FornecedorList() -> impl IntoView {
    let controller = CrudController::<Fornecedores>::new(fields());
    let ctx = use_global_context();

    let columns = vec![
        Column::searchable("nome", "Nome", |f: &Fornecedor| f.nome.clone())
            .sortable()
            .min_width(220.0),
        Column::searchable("cnpj", "CNPJ", |f: &Fornecedor| or_dash(&f.cnpj)),
        Column::text("tipo", "Tipo", |f: &Fornecedor| tipo_label(&f.tipo)).sortable(),
        Column::searchable("email", "E-mail", |f: &Fornecedor| or_dash(&f.email)),
        Column::text("telefone", "Telefone", |f: &Fornecedor| or_dash(&f.telefone)),
        Column::status(),
    ];
    let filters = FilterSpec {
        search_placeholder: "Nome, CNPJ ou e-mail...",
        status: true,
        selects: vec![SelectFilter::new("tipo", "Tipo", tipo_options())],
        ..FilterSpec::default()
    };
    let config = ListPageConfig::new(columns, filters).action(RowAction::new(
        "Contratos",
        "contracts",
        move |f: &Fornecedor| ctx.open_filtered(PageRoute::Contratos, FORNECEDOR_PARAM, f.id.to_string()),
    ));

    view! { <EntityListPage controller=controller config=config /> }
}
