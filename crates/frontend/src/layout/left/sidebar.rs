//! Sidebar with collapsible menu groups

use crate::layout::global_context::{use_global_context, PageRoute};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: Vec<(PageRoute, &'static str)>, // (route, icon)
}

pub fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "cadastros",
            label: "Cadastros",
            icon: "school",
            items: vec![
                (PageRoute::Escolas, "school"),
                (PageRoute::Modalidades, "modalities"),
                (PageRoute::Rotas, "routes"),
                (PageRoute::Produtos, "products"),
                (PageRoute::Refeicoes, "meals"),
                (PageRoute::Cardapios, "menus"),
            ],
        },
        MenuGroup {
            id: "compras",
            label: "Compras",
            icon: "orders",
            items: vec![
                (PageRoute::Fornecedores, "suppliers"),
                (PageRoute::Contratos, "contracts"),
                (PageRoute::Pedidos, "orders"),
            ],
        },
        MenuGroup {
            id: "estoque",
            label: "Estoque",
            icon: "inventory",
            items: vec![(PageRoute::Estoque, "inventory")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let active = Memo::new(move |_| ctx.route.get().section());

    // Every group starts expanded
    let expanded_groups = RwSignal::new(menu_groups().iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || active.get() == PageRoute::Dashboard
                style:padding-left="12px"
                on:click=move |_| ctx.open(PageRoute::Dashboard)
            >
                <div class="app-sidebar__item-content">
                    {icon("dashboard")}
                    <span>{PageRoute::Dashboard.title()}</span>
                </div>
            </div>

            {menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                let is_expanded = move || expanded_groups.with(|g| g.contains(&group_id));
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(route, icon_name)| view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || active.get() == route
                                        style:padding-left="10px"
                                        on:click=move |_| ctx.open(route)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(icon_name)}
                                            <span>{route.title()}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_list_page_is_in_the_menu() {
        let routes: Vec<PageRoute> = menu_groups().into_iter().flat_map(|g| g.items).map(|(r, _)| r).collect();
        for route in [
            PageRoute::Escolas,
            PageRoute::Modalidades,
            PageRoute::Fornecedores,
            PageRoute::Contratos,
            PageRoute::Produtos,
            PageRoute::Refeicoes,
            PageRoute::Cardapios,
            PageRoute::Rotas,
            PageRoute::Estoque,
            PageRoute::Pedidos,
        ] {
            assert!(routes.contains(&route), "{} missing", route.key());
        }
        assert!(routes.iter().all(|r| r.id().is_none()));
    }
}
