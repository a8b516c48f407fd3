use contracts::domain::a004_contrato::aggregate::{valor_total_contrato, Contrato};
use contracts::domain::common::{EntityId, EntityRecord};
use leptos::prelude::*;
use thaw::*;

use super::model::ContratoBundle;
use super::view_model::ContratoDetailsVm;
use crate::domain::a004_contrato::{vigencia, vigencia_label};
use crate::layout::global_context::{use_global_context, PageRoute};
use crate::shared::components::crud_dialog::FormDialog;
use crate::shared::components::delete_dialog::DeleteDialog;
use crate::shared::components::detail_field::DetailField;
use crate::shared::components::error_alert::ErrorAlert;
use crate::shared::components::form_fields::FormFields;
use crate::shared::date_utils::{format_naive, today};
use crate::shared::icons::icon;
use crate::shared::list::dialog::CrudDialog;
use crate::shared::list::lookup::NO_VALUE;
use crate::shared::number_format::{format_brl, format_quantity};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};

#[component]
#[allow(non_snake_case)]
pub fn ContratoDetails(id: EntityId) -> impl IntoView {
    let ctx = use_global_context();
    let vm = ContratoDetailsVm::new(id);
    let detail = vm.detail;
    detail.reload();

    let loading = detail.loading();
    let bundle = detail.data();
    let loaded = Signal::derive(move || bundle.with(Option::is_some));
    let editing = Signal::derive(move || vm.edit.with(CrudDialog::is_open));
    let title = move || {
        bundle.with(|b| {
            b.as_ref()
                .map(|b| b.contrato.label())
                .unwrap_or_else(|| Contrato::element_name().to_string())
        })
    };

    view! {
        <PageFrame page_id=page_id(&Contrato::full_name(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="details-header">
                <div class="page__header-left">
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.open(PageRoute::Contratos)>
                        {icon("chevron-left")}
                        " Voltar"
                    </Button>
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="details-actions">
                    <Show when=move || loaded.get() && !editing.get()>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.start_edit()>
                            {icon("edit")}
                            " Editar"
                        </Button>
                    </Show>
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
                <ContratoInfo vm=vm />
                <ItensSection vm=vm />
            </Show>

            <FormDialog
                dialog=vm.item
                fields=vm.item_fields
                element_name="Item do contrato"
                on_submit=Callback::new(move |_| vm.save_item())
            />
            <DeleteDialog
                delete=vm.remove
                on_confirm=Callback::new(move |_| vm.confirm_remove_item())
            />
        </PageFrame>
    }
}

/// Contract header, read-only or as an inline form
#[component]
#[allow(non_snake_case)]
fn ContratoInfo(vm: ContratoDetailsVm) -> impl IntoView {
    let bundle = vm.detail.data();
    let show = move |render: fn(&ContratoBundle) -> String| {
        Signal::derive(move || bundle.with(|b| b.as_ref().map(render).unwrap_or_default()))
    };
    let editing = Signal::derive(move || vm.edit.with(CrudDialog::is_open));
    let saving = Signal::derive(move || vm.edit.with(CrudDialog::is_submitting));
    let edit_error = Signal::derive(move || vm.edit.with(|d| d.error().map(String::from)));

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Dados do contrato"</h4>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <div class="details-grid--3col">
                        <DetailField label="Número" value=show(|b| b.contrato.numero.clone()) />
                        <DetailField label="Fornecedor" value=show(|b| b.fornecedores.label_of(b.contrato.fornecedor_id)) />
                        <DetailField
                            label="Vigência"
                            value=show(|b| vigencia_label(vigencia(&b.contrato, today())).to_string())
                        />
                        <DetailField label="Início" value=show(|b| format_naive(b.contrato.data_inicio)) />
                        <DetailField label="Término" value=show(|b| format_naive(b.contrato.data_fim)) />
                        <DetailField
                            label="Valor Total do Contrato"
                            value=show(|b| format_brl(valor_total_contrato(&b.itens)))
                        />
                    </div>
                }
            >
                <ErrorAlert
                    message=edit_error
                    on_dismiss=Callback::new(move |_| vm.edit.update(CrudDialog::dismiss_error))
                />
                <FormFields fields=vm.edit_fields.get_value() dialog=vm.edit />
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.cancel_edit()
                        disabled=saving
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save()
                        disabled=saving
                    >
                        {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                    </Button>
                </Flex>
            </Show>
        </div>
    }
}

/// Line items with add/edit/remove and the computed contract value
#[component]
#[allow(non_snake_case)]
fn ItensSection(vm: ContratoDetailsVm) -> impl IntoView {
    let bundle = vm.detail.data();
    let rows = Signal::derive(move || {
        bundle.with(|b| {
            b.as_ref()
                .map(|b| {
                    b.itens
                        .iter()
                        .map(|item| {
                            let quantidade = format!("{} {}", format_quantity(item.quantidade), b.unidade_of(item.produto_id));
                            (item.clone(), b.produtos.label_of(item.produto_id), quantidade.trim_end().to_string())
                        })
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });
    let total = Signal::derive(move || {
        bundle.with(|b| {
            b.as_ref()
                .map(|b| format_brl(valor_total_contrato(&b.itens)))
                .unwrap_or_else(|| NO_VALUE.to_string())
        })
    });
    let numeric = "font-variant-numeric: tabular-nums; text-align: right;";

    view! {
        <div class="details-section">
            <div class="page__header">
                <h4 class="details-section__title">
                    {move || format!("Itens do contrato ({})", rows.with(Vec::len))}
                </h4>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Small
                        on_click=move |_| vm.open_add_item()
                    >
                        {icon("plus")}
                        " Adicionar produto"
                    </Button>
                </div>
            </div>

            <Show
                when=move || !rows.with(Vec::is_empty)
                fallback=|| view! { <div class="table__empty">"Nenhum produto neste contrato."</div> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=220.0>"Produto"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Quantidade"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Preço unitário"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Total"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>"Ações"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || rows.get().into_iter().map(|(item, produto, quantidade)| {
                            let edit_row = item.clone();
                            let remove_label = produto.clone();
                            let preco = format_brl(item.preco_unitario);
                            let subtotal = format_brl(item.valor_total());
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{produto}</TableCellLayout>
                                    </TableCell>
                                    <TableCell><div style=numeric>{quantidade}</div></TableCell>
                                    <TableCell><div style=numeric>{preco}</div></TableCell>
                                    <TableCell><div style=numeric>{subtotal}</div></TableCell>
                                    <TableCell>
                                        <div class="table__actions">
                                            <button
                                                class="button button--icon"
                                                title="Editar"
                                                on:click=move |_| vm.open_edit_item(&edit_row)
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--icon button--danger"
                                                title="Remover"
                                                on:click=move |_| vm.request_remove_item(&item, remove_label.clone())
                                            >
                                                {icon("delete")}
                                            </button>
                                        </div>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                        <TableRow attr:class="table__totals-row">
                            <TableCell><strong>"Valor Total do Contrato"</strong></TableCell>
                            <TableCell>""</TableCell>
                            <TableCell>""</TableCell>
                            <TableCell><div style=numeric><strong>{move || total.get()}</strong></div></TableCell>
                            <TableCell>""</TableCell>
                        </TableRow>
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}
