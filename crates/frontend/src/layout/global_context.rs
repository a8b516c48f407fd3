use contracts::domain::common::EntityId;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::window;

/// Query parameter carrying the page key.
pub const PAGE_PARAM: &str = "page";
/// Query parameter carrying the record id of detail pages.
pub const ID_PARAM: &str = "id";

/// Every screen reachable from the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRoute {
    Dashboard,
    Escolas,
    EscolaDetalhe(EntityId),
    Modalidades,
    Fornecedores,
    Contratos,
    ContratoDetalhe(EntityId),
    Produtos,
    Refeicoes,
    Cardapios,
    Rotas,
    Estoque,
    Pedidos,
    PedidoDetalhe(EntityId),
}

impl PageRoute {
    pub fn key(&self) -> &'static str {
        match self {
            PageRoute::Dashboard => "dashboard",
            PageRoute::Escolas => "escolas",
            PageRoute::EscolaDetalhe(_) => "escola",
            PageRoute::Modalidades => "modalidades",
            PageRoute::Fornecedores => "fornecedores",
            PageRoute::Contratos => "contratos",
            PageRoute::ContratoDetalhe(_) => "contrato",
            PageRoute::Produtos => "produtos",
            PageRoute::Refeicoes => "refeicoes",
            PageRoute::Cardapios => "cardapios",
            PageRoute::Rotas => "rotas",
            PageRoute::Estoque => "estoque",
            PageRoute::Pedidos => "pedidos",
            PageRoute::PedidoDetalhe(_) => "pedido",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageRoute::Dashboard => "Painel",
            PageRoute::Escolas => "Escolas",
            PageRoute::EscolaDetalhe(_) => "Escola",
            PageRoute::Modalidades => "Modalidades",
            PageRoute::Fornecedores => "Fornecedores",
            PageRoute::Contratos => "Contratos",
            PageRoute::ContratoDetalhe(_) => "Contrato",
            PageRoute::Produtos => "Produtos",
            PageRoute::Refeicoes => "Refeições",
            PageRoute::Cardapios => "Cardápios",
            PageRoute::Rotas => "Rotas",
            PageRoute::Estoque => "Estoque Central",
            PageRoute::Pedidos => "Pedidos",
            PageRoute::PedidoDetalhe(_) => "Pedido",
        }
    }

    pub fn id(&self) -> Option<EntityId> {
        match self {
            PageRoute::EscolaDetalhe(id)
            | PageRoute::ContratoDetalhe(id)
            | PageRoute::PedidoDetalhe(id) => Some(*id),
            _ => None,
        }
    }

    /// List page a detail page belongs to, used to highlight the menu
    pub fn section(&self) -> PageRoute {
        match self {
            PageRoute::EscolaDetalhe(_) => PageRoute::Escolas,
            PageRoute::ContratoDetalhe(_) => PageRoute::Contratos,
            PageRoute::PedidoDetalhe(_) => PageRoute::Pedidos,
            other => *other,
        }
    }

    /// Detail pages fall back to their list when the id is missing or malformed.
    pub fn from_key(key: &str, id: Option<EntityId>) -> PageRoute {
        match (key, id) {
            ("escolas", _) | ("escola", None) => PageRoute::Escolas,
            ("escola", Some(id)) => PageRoute::EscolaDetalhe(id),
            ("modalidades", _) => PageRoute::Modalidades,
            ("fornecedores", _) => PageRoute::Fornecedores,
            ("contratos", _) | ("contrato", None) => PageRoute::Contratos,
            ("contrato", Some(id)) => PageRoute::ContratoDetalhe(id),
            ("produtos", _) => PageRoute::Produtos,
            ("refeicoes", _) => PageRoute::Refeicoes,
            ("cardapios", _) => PageRoute::Cardapios,
            ("rotas", _) => PageRoute::Rotas,
            ("estoque", _) => PageRoute::Estoque,
            ("pedidos", _) | ("pedido", None) => PageRoute::Pedidos,
            ("pedido", Some(id)) => PageRoute::PedidoDetalhe(id),
            _ => PageRoute::Dashboard,
        }
    }
}

/// Splits a `location.search` string into the route and the remaining parameters.
pub fn parse_query(search: &str) -> (PageRoute, BTreeMap<String, String>) {
    let mut params: BTreeMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    let key = params.remove(PAGE_PARAM).unwrap_or_default();
    let id = params
        .remove(ID_PARAM)
        .and_then(|raw| raw.trim().parse::<EntityId>().ok());
    (PageRoute::from_key(&key, id), params)
}

pub fn build_query(route: PageRoute, params: &BTreeMap<String, String>) -> String {
    let mut query = params.clone();
    query.insert(PAGE_PARAM.to_string(), route.key().to_string());
    if let Some(id) = route.id() {
        query.insert(ID_PARAM.to_string(), id.to_string());
    }
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<PageRoute>,
    pub params: RwSignal<BTreeMap<String, String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(PageRoute::Dashboard),
            params: RwSignal::new(BTreeMap::new()),
            left_open: RwSignal::new(true),
        }
    }

    fn apply_search(&self, search: &str) {
        let (route, params) = parse_query(search);
        self.route.set(route);
        self.params.set(params);
    }

    pub fn init_router_integration(&self) {
        self.apply_search(&current_search());

        let this = *self;
        let _popstate = window_event_listener(leptos::ev::popstate, move |_| {
            this.apply_search(&current_search());
        });

        Effect::new(move |_| {
            let new_url = this
                .params
                .with(|params| build_query(this.route.get(), params));

            // Only push when the URL actually changed; popstate lands here too
            if current_search() != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.push_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, route: PageRoute, params: BTreeMap<String, String>) {
        log::debug!("navigate: {} {:?}", route.key(), params);
        self.params.set(params);
        self.route.set(route);
    }

    pub fn open(&self, route: PageRoute) {
        self.navigate(route, BTreeMap::new());
    }

    /// Opens `route` with a single query parameter, used to pre-seed a list filter.
    pub fn open_filtered(&self, route: PageRoute, key: &str, value: impl Into<String>) {
        self.navigate(route, BTreeMap::from([(key.to_string(), value.into())]));
    }

    pub fn param(&self, key: &str) -> Option<String> {
        self.params
            .with_untracked(|params| params.get(key).cloned())
            .filter(|value| !value.trim().is_empty())
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_opens_dashboard() {
        let (route, params) = parse_query("");
        assert_eq!(route, PageRoute::Dashboard);
        assert!(params.is_empty());
    }

    #[test]
    fn list_route_keeps_filter_params() {
        let (route, params) = parse_query("?page=contratos&fornecedor_id=3");
        assert_eq!(route, PageRoute::Contratos);
        assert_eq!(params.get("fornecedor_id").map(String::as_str), Some("3"));
        assert!(!params.contains_key(PAGE_PARAM));
    }

    #[test]
    fn detail_route_requires_numeric_id() {
        assert_eq!(
            parse_query("?page=contrato&id=12").0,
            PageRoute::ContratoDetalhe(12)
        );
        assert_eq!(parse_query("?page=contrato&id=abc").0, PageRoute::Contratos);
        assert_eq!(parse_query("?page=escola").0, PageRoute::Escolas);
    }

    #[test]
    fn unknown_page_falls_back_to_dashboard() {
        assert_eq!(parse_query("?page=relatorios").0, PageRoute::Dashboard);
    }

    #[test]
    fn build_then_parse_restores_route_and_params() {
        let params = BTreeMap::from([("fornecedor_id".to_string(), "7".to_string())]);
        let query = build_query(PageRoute::PedidoDetalhe(4), &params);
        assert!(query.starts_with('?'));
        let (route, back) = parse_query(&query);
        assert_eq!(route, PageRoute::PedidoDetalhe(4));
        assert_eq!(back, params);
    }

    #[test]
    fn detail_pages_belong_to_their_list() {
        assert_eq!(PageRoute::ContratoDetalhe(5).section(), PageRoute::Contratos);
        assert_eq!(PageRoute::Estoque.section(), PageRoute::Estoque);
    }

    #[test]
    fn every_route_key_maps_back() {
        let routes = [
            PageRoute::Dashboard,
            PageRoute::Escolas,
            PageRoute::EscolaDetalhe(1),
            PageRoute::Modalidades,
            PageRoute::Fornecedores,
            PageRoute::Contratos,
            PageRoute::ContratoDetalhe(2),
            PageRoute::Produtos,
            PageRoute::Refeicoes,
            PageRoute::Cardapios,
            PageRoute::Rotas,
            PageRoute::Estoque,
            PageRoute::Pedidos,
            PageRoute::PedidoDetalhe(3),
        ];
        for route in routes {
            assert_eq!(PageRoute::from_key(route.key(), route.id()), route);
        }
    }
}
