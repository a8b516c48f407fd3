use contracts::domain::a010_pedido::aggregate::Pedido;
use contracts::domain::common::EntityRecord;
use leptos::prelude::*;

use crate::domain::a003_fornecedor::Fornecedores;
use crate::domain::a010_pedido::{status_label, status_options, status_variant, Pedidos};
use crate::layout::global_context::{use_global_context, PageRoute};
use crate::shared::components::delete_dialog::DeleteDialog;
use crate::shared::components::{
    CellValue, Column, FilterSpec, ListPageConfig, ListSection, RowAction, SelectFilter,
};
use crate::shared::date_utils::format_naive;
use crate::shared::list::controller::{confirm_delete_with, ListController};
use crate::shared::list::dialog::DeleteConfirm;
use crate::shared::number_format::format_brl;

#[component]
#[allow(non_snake_case)]
pub fn PedidoList() -> impl IntoView {
    let ctx = use_global_context();
    let list = ListController::<Pedidos>::new();
    let fornecedores = ListController::<Fornecedores>::new();
    let delete = RwSignal::new(DeleteConfirm::default());

    let confirm_delete = move || {
        let client = list.client();
        confirm_delete_with(
            delete,
            move |request| async move { client.remover(&Pedido::api_path(), request.id, request.force).await },
            move || {
                log::info!("pedido excluído");
                list.fetch();
            },
        );
    };

    let columns = vec![
        Column::searchable("numero", "Número", |p: &Pedido| p.numero.clone())
            .sortable()
            .min_width(120.0),
        Column::text("data_pedido", "Data", |p: &Pedido| format_naive(p.data_pedido)).sortable(),
        Column::new("status", "Status", |p: &Pedido| CellValue::Badge {
            label: status_label(&p.status),
            variant: status_variant(&p.status),
        }),
        Column::text("itens", "Itens", |p: &Pedido| p.itens.len().to_string())
            .sortable()
            .numeric(),
        Column::text("valor_total", "Valor total", |p: &Pedido| format_brl(p.valor_total()))
            .sortable()
            .numeric(),
    ];
    let filters = FilterSpec {
        search_placeholder: "Número ou produto...",
        selects: vec![SelectFilter::new("status", "Status", status_options())],
        multi_selects: vec![SelectFilter::new("fornecedor_ids", "Fornecedores", fornecedores.record_options())],
        sort_options: vec![("", "Número"), ("data_pedido", "Data"), ("valor_total", "Valor total")],
        ..FilterSpec::default()
    };
    let config = ListPageConfig::new(columns, filters)
        .action(RowAction::new("Ver", "eye", move |p: &Pedido| ctx.open(PageRoute::PedidoDetalhe(p.id))))
        .action(
            RowAction::new("Excluir", "delete", move |p: &Pedido| {
                let label = p.label();
                delete.update(|d| d.request(p.id, label));
            })
            .danger(),
        );

    view! {
        <ListSection
            list=list
            config=config
            on_load=Some(Callback::new(move |_| fornecedores.fetch()))
        />
        <DeleteDialog delete=delete on_confirm=Callback::new(move |_| confirm_delete()) />
    }
}
