use crate::shared::icons::icon;
use crate::shared::list::filter::StatusFilter;
use crate::shared::list::form::OptionsFn;
use crate::shared::list::ListState;
use crate::shared::list_utils::SearchInput;
use leptos::prelude::*;
use thaw::*;

/// Categorical or multi-select filter input
#[derive(Clone)]
pub struct SelectFilter {
    pub key: &'static str,
    pub label: &'static str,
    pub options: OptionsFn,
}

impl SelectFilter {
    pub fn new(key: &'static str, label: &'static str, options: OptionsFn) -> Self {
        Self { key, label, options }
    }
}

/// Filter inputs offered by a list page
#[derive(Clone, Default)]
pub struct FilterSpec {
    pub search_placeholder: &'static str,
    pub status: bool,
    pub selects: Vec<SelectFilter>,
    pub multi_selects: Vec<SelectFilter>,
    /// `(key, label)`; an empty key means the page default
    pub sort_options: Vec<(&'static str, &'static str)>,
}

/// Collapsible filter panel with pagination in the header
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: Signal<bool>,
    on_toggle: Callback<()>,
    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,
    on_clear: Callback<()>,
    pagination_controls: ChildrenFn,
    filter_content: ChildrenFn,
    #[prop(optional)] header_right: Option<ChildrenFn>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=move |_| on_toggle.run(())>
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtros"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="filter-panel__badge">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">{pagination_controls()}</div>
                <div class="filter-panel-header__right">
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_clear.run(())>
                            "Limpar filtros"
                        </Button>
                    </Show>
                    {header_right.as_ref().map(|right| right())}
                </div>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">{filter_content()}</div>
            </Show>
        </div>
    }
}

/// Inputs of a [`FilterSpec`] bound to the page state
#[component]
pub fn FilterFields(spec: FilterSpec, state: RwSignal<ListState>) -> impl IntoView {
    let search = Signal::derive(move || state.with(|s| s.filters.search.clone()));
    let FilterSpec {
        search_placeholder,
        status,
        selects,
        multi_selects,
        sort_options,
    } = spec;

    let status_input = status.then(|| {
        view! {
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Situação:"</Label>
                <select
                    class="form__select"
                    prop:value=move || state.with(|s| s.filters.status.key())
                    on:change=move |ev| {
                        let status = StatusFilter::from_key(&event_target_value(&ev));
                        state.update(|s| s.update_filters(|f| f.status = status));
                    }
                >
                    <option value="">"Todos"</option>
                    <option value="ativo">"Ativos"</option>
                    <option value="inativo">"Inativos"</option>
                </select>
            </Flex>
        }
    });

    let select_inputs = selects
        .into_iter()
        .map(|filter| {
            let key = filter.key;
            let options = filter.options;
            let current = move || state.with(|s| s.filters.selected_value(key));
            view! {
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>{format!("{}:", filter.label)}</Label>
                    <select
                        class="form__select"
                        prop:value=current
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.update_filters(|f| f.set_selected(key, value)));
                        }
                    >
                        <option value="">"Todos"</option>
                        {move || {
                            options()
                                .into_iter()
                                .map(|(value, label)| {
                                    let selected = current() == value;
                                    view! { <option value=value selected=selected>{label}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </Flex>
            }
        })
        .collect_view();

    let multi_inputs = multi_selects
        .into_iter()
        .map(|filter| {
            let key = filter.key;
            let options = filter.options;
            view! {
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>{format!("{}:", filter.label)}</Label>
                    <div class="filter-panel__chips">
                        {move || {
                            options()
                                .into_iter()
                                .map(|(value, label)| {
                                    let for_check = value.clone();
                                    view! {
                                        <label class="filter-chip">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || state.with(|s| s.filters.is_multi_selected(key, &for_check))
                                                on:change=move |_| {
                                                    state.update(|s| s.update_filters(|f| f.toggle_multi(key, &value)))
                                                }
                                            />
                                            <span>{label}</span>
                                        </label>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Flex>
            }
        })
        .collect_view();

    let sort_input = (!sort_options.is_empty()).then(|| {
        view! {
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Ordenar por:"</Label>
                <select
                    class="form__select"
                    prop:value=move || state.with(|s| s.filters.sort_by.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let key = event_target_value(&ev);
                        state.update(|s| s.set_sort(&key));
                    }
                >
                    {sort_options
                        .into_iter()
                        .map(|(key, label)| view! { <option value=key>{label}</option> })
                        .collect_view()}
                </select>
            </Flex>
        }
    });

    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::End>
            <div style="flex: 1; max-width: 320px;">
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Pesquisar:"</Label>
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |text: String| {
                            state.update(|s| s.update_filters(|f| f.search = text));
                        })
                        placeholder=search_placeholder.to_string()
                    />
                </Flex>
            </div>
            {status_input}
            {select_inputs}
            {multi_inputs}
            {sort_input}
        </Flex>
    }
}
