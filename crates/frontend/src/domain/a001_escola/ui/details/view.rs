use contracts::domain::a001_escola::aggregate::{total_alunos, Escola};
use contracts::domain::common::{EntityId, EntityRecord};
use leptos::prelude::*;
use thaw::*;

use super::model::EscolaBundle;
use super::view_model::EscolaDetailsVm;
use crate::domain::a001_escola::administracao_label;
use crate::layout::global_context::{use_global_context, PageRoute};
use crate::shared::components::crud_dialog::FormDialog;
use crate::shared::components::delete_dialog::DeleteDialog;
use crate::shared::components::detail_field::DetailField;
use crate::shared::components::error_alert::ErrorAlert;
use crate::shared::components::form_fields::FormFields;
use crate::shared::components::ui::badge::{Badge, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::list::dialog::CrudDialog;
use crate::shared::list::lookup::or_dash;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};

#[component]
#[allow(non_snake_case)]
pub fn EscolaDetails(id: EntityId) -> impl IntoView {
    let ctx = use_global_context();
    let vm = EscolaDetailsVm::new(id);
    let detail = vm.detail;
    detail.reload();

    let loading = detail.loading();
    let escola = vm.escola();
    let loaded = Signal::derive(move || escola.with(Option::is_some));
    let editing = Signal::derive(move || vm.edit.with(CrudDialog::is_open));

    view! {
        <PageFrame page_id=page_id(&Escola::full_name(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="details-header">
                <div class="page__header-left">
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.open(PageRoute::Escolas)>
                        {icon("chevron-left")}
                        " Voltar"
                    </Button>
                    <h1 class="page__title">
                        {move || escola.get().map(|e| e.nome).unwrap_or_else(|| Escola::element_name().to_string())}
                    </h1>
                    <Show when=move || loaded.get()>
                        <StatusBadge ativo=Signal::derive(move || escola.with(|e| e.as_ref().is_some_and(|e| e.ativo))) />
                    </Show>
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
                <EscolaInfo vm=vm />
                <MatriculasSection vm=vm />
            </Show>

            <FormDialog
                dialog=vm.matricula
                fields=vm.matricula_fields
                element_name="Modalidade atendida"
                on_submit=Callback::new(move |_| vm.save_matricula())
            />
            <DeleteDialog
                delete=vm.remove
                on_confirm=Callback::new(move |_| vm.confirm_remove_matricula())
            />
        </PageFrame>
    }
}

/// General data, read-only or as an inline form
#[component]
#[allow(non_snake_case)]
fn EscolaInfo(vm: EscolaDetailsVm) -> impl IntoView {
    let bundle = vm.detail.data();
    let show = move |render: fn(&EscolaBundle) -> String| {
        Signal::derive(move || bundle.with(|b| b.as_ref().map(render).unwrap_or_default()))
    };
    let editing = Signal::derive(move || vm.edit.with(CrudDialog::is_open));
    let saving = Signal::derive(move || vm.edit.with(CrudDialog::is_submitting));
    let edit_error = Signal::derive(move || vm.edit.with(|d| d.error().map(String::from)));

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Dados da escola"</h4>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <div class="details-grid--3col">
                        <DetailField label="Código INEP" value=show(|b| or_dash(&b.escola.codigo_inep)) />
                        <DetailField label="Município" value=show(|b| or_dash(&b.escola.municipio)) />
                        <DetailField label="Endereço" value=show(|b| or_dash(&b.escola.endereco)) />
                        <DetailField label="Telefone" value=show(|b| or_dash(&b.escola.telefone)) />
                        <DetailField label="E-mail" value=show(|b| or_dash(&b.escola.email)) />
                        <DetailField label="Rota" value=show(|b| b.rotas.label_of_opt(b.escola.rota_id)) />
                        <DetailField label="Administração" value=show(|b| administracao_label(&b.escola.administracao)) />
                        <DetailField label="Total de alunos" value=show(|b| total_alunos(&b.matriculas).to_string()) />
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

/// Enrollments per modalidade with add/edit/remove
#[component]
#[allow(non_snake_case)]
fn MatriculasSection(vm: EscolaDetailsVm) -> impl IntoView {
    let bundle = vm.detail.data();
    let rows = Signal::derive(move || {
        bundle.with(|b| {
            b.as_ref()
                .map(|b| {
                    b.matriculas
                        .iter()
                        .map(|m| (m.clone(), b.modalidades.label_of(m.modalidade_id)))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });
    let total = Signal::derive(move || {
        bundle.with(|b| b.as_ref().map(|b| total_alunos(&b.matriculas)).unwrap_or(0))
    });

    view! {
        <div class="details-section">
            <div class="page__header">
                <h4 class="details-section__title">
                    {move || format!("Modalidades atendidas ({})", rows.with(Vec::len))}
                </h4>
                <div class="page__header-right">
                    <Badge variant="primary".to_string()>
                        {move || format!("{} alunos", total.get())}
                    </Badge>
                    <Button
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Small
                        on_click=move |_| vm.open_add_matricula()
                    >
                        {icon("plus")}
                        " Adicionar modalidade"
                    </Button>
                </div>
            </div>

            <Show
                when=move || !rows.with(Vec::is_empty)
                fallback=|| view! { <div class="table__empty">"Nenhuma modalidade vinculada."</div> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=240.0>"Modalidade"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Alunos"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>"Ações"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || rows.get().into_iter().map(|(m, label)| {
                            let edit_row = m.clone();
                            let remove_label = label.clone();
                            let alunos = m.quantidade_alunos.to_string();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{label}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <div style="font-variant-numeric: tabular-nums; text-align: right;">
                                            {alunos}
                                        </div>
                                    </TableCell>
                                    <TableCell>
                                        <div class="table__actions">
                                            <button
                                                class="button button--icon"
                                                title="Editar"
                                                on:click=move |_| vm.open_edit_matricula(&edit_row)
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--icon button--danger"
                                                title="Remover"
                                                on:click=move |_| vm.request_remove_matricula(&m, remove_label.clone())
                                            >
                                                {icon("delete")}
                                            </button>
                                        </div>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}
