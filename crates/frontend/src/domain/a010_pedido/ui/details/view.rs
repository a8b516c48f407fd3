//! Read-only order view with items and subtotals per supplier

use contracts::domain::a010_pedido::aggregate::Pedido;
use contracts::domain::common::{EntityId, EntityRecord};
use leptos::prelude::*;
use thaw::*;

use super::model::{self, PedidoBundle};
use crate::domain::a010_pedido::{produto_label, status_label, status_variant};
use crate::layout::global_context::{use_global_context, PageRoute};
use crate::shared::components::detail_field::DetailField;
use crate::shared::components::error_alert::ErrorAlert;
use crate::shared::components::ui::badge::variant_class;
use crate::shared::date_utils::format_naive;
use crate::shared::icons::icon;
use crate::shared::list::controller::DetailController;
use crate::shared::number_format::{format_brl, format_quantity};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};

const NUMERIC: &str = "font-variant-numeric: tabular-nums; text-align: right;";

#[component]
#[allow(non_snake_case)]
pub fn PedidoDetails(id: EntityId) -> impl IntoView {
    let ctx = use_global_context();
    let detail = DetailController::new(id, model::load, model::LOAD_ERROR);
    detail.reload();

    let loading = detail.loading();
    let bundle = detail.data();
    let loaded = Signal::derive(move || bundle.with(Option::is_some));
    let title = move || {
        bundle.with(|b| {
            b.as_ref()
                .map(|b| b.pedido.label())
                .unwrap_or_else(|| Pedido::element_name().to_string())
        })
    };
    let status = Signal::derive(move || bundle.with(|b| b.as_ref().map(|b| b.pedido.status.clone()).unwrap_or_default()));

    view! {
        <PageFrame page_id=page_id(&Pedido::full_name(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="details-header">
                <div class="page__header-left">
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.open(PageRoute::Pedidos)>
                        {icon("chevron-left")}
                        " Voltar"
                    </Button>
                    <h1 class="page__title">{title}</h1>
                    <Show when=move || loaded.get()>
                        <span class=move || format!("badge {}", variant_class(status_variant(&status.get())))>
                            {move || status_label(&status.get())}
                        </span>
                    </Show>
                </div>
                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| detail.reload()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Carregando..." } else { " Atualizar" }}
                    </Button>
                </div>
            </div>

            <ErrorAlert message=detail.error() on_retry=Callback::new(move |_| detail.reload()) />

            <Show
                when=move || loaded.get()
                fallback=move || view! {
                    <Show when=move || loading.get()>
                        <div class="details-loading">
                            <Spinner size=SpinnerSize::Small />
                            " Carregando..."
                        </div>
                    </Show>
                }
            >
                <PedidoInfo bundle=bundle />
                <ItensSection bundle=bundle />
                <FornecedoresSection bundle=bundle />
            </Show>
        </PageFrame>
    }
}

#[component]
#[allow(non_snake_case)]
fn PedidoInfo(bundle: Signal<Option<PedidoBundle>>) -> impl IntoView {
    let show = move |render: fn(&PedidoBundle) -> String| {
        Signal::derive(move || bundle.with(|b| b.as_ref().map(render).unwrap_or_default()))
    };

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Dados do pedido"</h4>
            <div class="details-grid--3col">
                <DetailField label="Número" value=show(|b| b.pedido.numero.clone()) />
                <DetailField label="Data do pedido" value=show(|b| format_naive(b.pedido.data_pedido)) />
                <DetailField label="Itens" value=show(|b| b.pedido.itens.len().to_string()) />
                <DetailField label="Fornecedores" value=show(|b| b.pedido.totais_por_fornecedor().len().to_string()) />
                <DetailField label="Valor total" value=show(|b| format_brl(b.pedido.valor_total())) />
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ItensSection(bundle: Signal<Option<PedidoBundle>>) -> impl IntoView {
    let rows = Signal::derive(move || {
        bundle.with(|b| {
            b.as_ref()
                .map(|b| {
                    b.pedido
                        .itens
                        .iter()
                        .map(|item| {
                            (
                                produto_label(item, &b.produtos),
                                b.fornecedores.label_of(item.fornecedor_id),
                                item.clone(),
                            )
                        })
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });

    view! {
        <div class="details-section">
            <h4 class="details-section__title">
                {move || format!("Itens ({})", rows.with(Vec::len))}
            </h4>
            <Show
                when=move || !rows.with(Vec::is_empty)
                fallback=|| view! { <div class="table__empty">"Pedido sem itens."</div> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=220.0>"Produto"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=200.0>"Fornecedor"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Quantidade"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Preço unitário"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Total"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || rows.get().into_iter().map(|(produto, fornecedor, item)| view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout truncate=true>{produto}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{fornecedor}</TableCellLayout>
                                </TableCell>
                                <TableCell><div style=NUMERIC>{format_quantity(item.quantidade)}</div></TableCell>
                                <TableCell><div style=NUMERIC>{format_brl(item.preco_unitario)}</div></TableCell>
                                <TableCell><div style=NUMERIC>{format_brl(item.valor_total())}</div></TableCell>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn FornecedoresSection(bundle: Signal<Option<PedidoBundle>>) -> impl IntoView {
    let rows = Signal::derive(move || {
        bundle.with(|b| {
            b.as_ref()
                .map(|b| {
                    b.pedido
                        .totais_por_fornecedor()
                        .into_iter()
                        .map(|t| (b.fornecedores.label_of(t.fornecedor_id), t))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });
    let total = Signal::derive(move || {
        bundle.with(|b| b.as_ref().map(|b| b.pedido.valor_total()).unwrap_or(0.0))
    });

    view! {
        <Show when=move || !rows.with(Vec::is_empty)>
            <div class="details-section">
                <h4 class="details-section__title">"Totais por fornecedor"</h4>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=220.0>"Fornecedor"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>"Itens"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=140.0>"Subtotal"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || rows.get().into_iter().map(|(fornecedor, t)| view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout truncate=true>{fornecedor}</TableCellLayout>
                                </TableCell>
                                <TableCell><div style=NUMERIC>{t.itens.to_string()}</div></TableCell>
                                <TableCell><div style=NUMERIC>{format_brl(t.valor_total)}</div></TableCell>
                            </TableRow>
                        }).collect_view()}
                        <TableRow attr:class="table__totals-row">
                            <TableCell><strong>"Total do pedido"</strong></TableCell>
                            <TableCell>""</TableCell>
                            <TableCell><div style=NUMERIC><strong>{move || format_brl(total.get())}</strong></div></TableCell>
                        </TableRow>
                    </TableBody>
                </Table>
            </div>
        </Show>
    }
}
