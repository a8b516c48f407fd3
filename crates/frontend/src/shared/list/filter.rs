//! Predicate composition and sorting for in-memory list pages
//!
//! Every page keeps the whole collection in memory and derives the visible
//! rows from a [`FilterState`]. All predicates are optional and combined with
//! logical AND; the derivation is pure so it can be memoized.

use contracts::domain::common::EntityRecord;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Value of one record field projected for filtering and sorting
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Missing,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn opt_text(value: &Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => FieldValue::Text(v.clone()),
            _ => FieldValue::Missing,
        }
    }

    pub fn opt_id(value: Option<i64>) -> Self {
        value.map(|v| FieldValue::Number(v as f64)).unwrap_or(FieldValue::Missing)
    }

    /// String used for categorical equality and dropdown options
    pub fn as_key(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Missing => String::new(),
        }
    }
}

/// Record that can be shown on a list page
pub trait Listable: EntityRecord {
    /// Text fields matched by the search box
    fn search_fields(&self) -> Vec<String>;

    /// Projection of a field by key, used for categorical filters and sorting
    fn field(&self, key: &str) -> FieldValue;

    /// Tag set used by multi-select filters
    fn tags(&self, _key: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Tri-state selector over the `ativo` flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    Todos,
    Ativos,
    Inativos,
}

impl StatusFilter {
    pub fn key(&self) -> &'static str {
        match self {
            StatusFilter::Todos => "",
            StatusFilter::Ativos => "ativo",
            StatusFilter::Inativos => "inativo",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "ativo" => StatusFilter::Ativos,
            "inativo" => StatusFilter::Inativos,
            _ => StatusFilter::Todos,
        }
    }

    pub fn matches(&self, ativo: bool) -> bool {
        match self {
            StatusFilter::Todos => true,
            StatusFilter::Ativos => ativo,
            StatusFilter::Inativos => !ativo,
        }
    }
}

/// Current filter values of one page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub status: StatusFilter,
    /// Categorical filters; an empty value means "no filter"
    pub selected: BTreeMap<String, String>,
    /// Multi-select filters; an empty set means "match all"
    pub multi: BTreeMap<String, BTreeSet<String>>,
    /// Sort key override; `None` uses the page default
    pub sort_by: Option<String>,
}

impl FilterState {
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.search.trim().is_empty() {
            count += 1;
        }
        if self.status != StatusFilter::Todos {
            count += 1;
        }
        count += self.selected.values().filter(|v| !v.is_empty()).count();
        count += self.multi.values().filter(|v| !v.is_empty()).count();
        count
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_count() > 0
    }

    pub fn selected_value(&self, key: &str) -> String {
        self.selected.get(key).cloned().unwrap_or_default()
    }

    pub fn set_selected(&mut self, key: &str, value: String) {
        if value.is_empty() {
            self.selected.remove(key);
        } else {
            self.selected.insert(key.to_string(), value);
        }
    }

    pub fn toggle_multi(&mut self, key: &str, value: &str) {
        let set = self.multi.entry(key.to_string()).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        if set.is_empty() {
            self.multi.remove(key);
        }
    }

    pub fn is_multi_selected(&self, key: &str, value: &str) -> bool {
        self.multi.get(key).map(|s| s.contains(value)).unwrap_or(false)
    }

    /// Clears every filter but keeps the sort key
    pub fn clear(&mut self) {
        let sort_by = self.sort_by.take();
        *self = FilterState { sort_by, ..FilterState::default() };
    }
}

pub fn matches_search<T: Listable>(item: &T, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// True iff the record satisfies every active predicate
pub fn matches<T: Listable>(item: &T, state: &FilterState) -> bool {
    if !matches_search(item, &state.search) {
        return false;
    }
    if !state.status.matches(item.ativo()) {
        return false;
    }
    for (key, wanted) in &state.selected {
        if !wanted.is_empty() && item.field(key).as_key() != *wanted {
            return false;
        }
    }
    for (key, wanted) in &state.multi {
        if wanted.is_empty() {
            continue;
        }
        if !item.tags(key).iter().any(|tag| wanted.contains(tag)) {
            return false;
        }
    }
    true
}

/// Filtered and sorted copy of `items`
pub fn apply_filters<T: Listable + Clone>(items: &[T], state: &FilterState, default_sort: &str) -> Vec<T> {
    let mut out: Vec<T> = items.iter().filter(|item| matches(*item, state)).cloned().collect();
    let key = state
        .sort_by
        .as_deref()
        .filter(|k| !k.is_empty())
        .unwrap_or(default_sort);
    out.sort_by(|a, b| compare_values(&a.field(key), &b.field(key)));
    out
}

/// Missing values compare as empty text or zero
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (FieldValue::Number(x), FieldValue::Missing) => x.partial_cmp(&0.0).unwrap_or(Ordering::Equal),
        (FieldValue::Missing, FieldValue::Number(y)) => 0.0f64.partial_cmp(y).unwrap_or(Ordering::Equal),
        _ => locale_cmp(&a.as_key(), &b.as_key()),
    }
}

/// Case and accent insensitive comparison, ties broken by the raw strings
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// Unique, sorted, non-empty values of a field in the loaded collection
pub fn distinct_values<T: Listable>(items: &[T], key: &str) -> Vec<String> {
    let set: BTreeSet<String> = items
        .iter()
        .map(|item| item.field(key).as_key())
        .filter(|v| !v.is_empty())
        .collect();
    let mut values: Vec<String> = set.into_iter().collect();
    values.sort_by(|a, b| locale_cmp(a, b));
    values
}

/// Unique, sorted, non-empty tags of the loaded collection
pub fn distinct_tags<T: Listable>(items: &[T], key: &str) -> Vec<String> {
    let set: BTreeSet<String> = items
        .iter()
        .flat_map(|item| item.tags(key))
        .filter(|v| !v.is_empty())
        .collect();
    let mut values: Vec<String> = set.into_iter().collect();
    values.sort_by(|a, b| locale_cmp(a, b));
    values
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq, serde::Deserialize)]
    pub(crate) struct Item {
        pub id: i64,
        pub nome: String,
        pub categoria: Option<String>,
        pub ativo: bool,
        pub tags: Vec<String>,
        pub preco: f64,
    }

    impl EntityRecord for Item {
        fn id(&self) -> i64 {
            self.id
        }
        fn ativo(&self) -> bool {
            self.ativo
        }
        fn label(&self) -> String {
            self.nome.clone()
        }
        fn entity_index() -> &'static str {
            "t000"
        }
        fn collection_name() -> &'static str {
            "itens"
        }
        fn element_name() -> &'static str {
            "Item"
        }
        fn list_name() -> &'static str {
            "Itens"
        }
    }

    impl Listable for Item {
        fn search_fields(&self) -> Vec<String> {
            vec![self.nome.clone()]
        }
        fn field(&self, key: &str) -> FieldValue {
            match key {
                "nome" => FieldValue::text(&self.nome),
                "categoria" => FieldValue::opt_text(&self.categoria),
                "preco" => FieldValue::Number(self.preco),
                _ => FieldValue::Missing,
            }
        }
        fn tags(&self, key: &str) -> Vec<String> {
            match key {
                "tags" => self.tags.clone(),
                _ => Vec::new(),
            }
        }
    }

    pub(crate) fn item(id: i64, nome: &str, categoria: Option<&str>, ativo: bool) -> Item {
        Item {
            id,
            nome: nome.to_string(),
            categoria: categoria.map(String::from),
            ativo,
            tags: Vec::new(),
            preco: 0.0,
        }
    }

    #[test]
    fn test_status_excludes_regardless_of_other_filters() {
        let arroz = item(1, "Arroz", Some("Cereais"), true);
        let mut state = FilterState {
            search: "arr".into(),
            status: StatusFilter::Inativos,
            ..FilterState::default()
        };
        state.set_selected("categoria", "Cereais".into());
        assert!(!matches(&arroz, &state));

        state.status = StatusFilter::Ativos;
        assert!(matches(&arroz, &state));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let a = item(1, "Distribuidora Silva LTDA", None, true);
        assert!(matches_search(&a, "ltda"));
        assert!(matches_search(&a, "  Silva "));
        assert!(!matches_search(&a, "eireli"));
        assert!(matches_search(&a, ""));
    }

    #[test]
    fn test_multi_select_intersection() {
        let mut a = item(1, "Cardápio A", None, true);
        a.tags = vec!["1".into(), "2".into()];
        let mut state = FilterState::default();
        assert!(matches(&a, &state));

        state.toggle_multi("tags", "3");
        assert!(!matches(&a, &state));
        state.toggle_multi("tags", "2");
        assert!(matches(&a, &state));

        state.toggle_multi("tags", "2");
        state.toggle_multi("tags", "3");
        assert!(state.multi.is_empty());
    }

    #[test]
    fn test_sort_is_accent_insensitive_and_missing_first() {
        let items = vec![
            item(1, "Óleo", Some("Óleos"), true),
            item(2, "açúcar", None, true),
            item(3, "Batata", Some("Hortifruti"), true),
            item(4, "Abacaxi", Some("Frutas"), true),
        ];
        let sorted = apply_filters(&items, &FilterState::default(), "nome");
        let names: Vec<&str> = sorted.iter().map(|i| i.nome.as_str()).collect();
        assert_eq!(names, vec!["Abacaxi", "açúcar", "Batata", "Óleo"]);

        let state = FilterState { sort_by: Some("categoria".into()), ..FilterState::default() };
        let by_cat = apply_filters(&items, &state, "nome");
        assert_eq!(by_cat[0].id, 2);
    }

    #[test]
    fn test_numeric_sort() {
        let mut a = item(1, "a", None, true);
        a.preco = 10.5;
        let mut b = item(2, "b", None, true);
        b.preco = 2.0;
        let state = FilterState { sort_by: Some("preco".into()), ..FilterState::default() };
        let sorted = apply_filters(&[a, b], &state, "nome");
        assert_eq!(sorted[0].id, 2);
    }

    #[test]
    fn test_distinct_values_skip_empty() {
        let items = vec![
            item(1, "a", Some("Frutas"), true),
            item(2, "b", Some("Cereais"), true),
            item(3, "c", Some("Frutas"), false),
            item(4, "d", None, true),
            item(5, "e", Some("  "), true),
        ];
        assert_eq!(distinct_values(&items, "categoria"), vec!["Cereais", "Frutas"]);
    }

    #[test]
    fn test_active_count() {
        let mut state = FilterState::default();
        assert!(!state.has_active_filters());
        state.search = "x".into();
        state.status = StatusFilter::Ativos;
        state.set_selected("categoria", "Frutas".into());
        state.toggle_multi("tags", "1");
        state.sort_by = Some("preco".into());
        assert_eq!(state.active_count(), 4);

        state.clear();
        assert!(!state.has_active_filters());
        assert_eq!(state.sort_by.as_deref(), Some("preco"));
    }

    #[test]
    fn test_suppliers_search_scenario() {
        let items: Vec<Item> = (1..=25)
            .map(|i| {
                let nome = if i % 3 == 0 {
                    format!("Fornecedor {:02} Ltda", i)
                } else if i % 5 == 0 {
                    format!("COMERCIAL {:02} LTDA", i)
                } else {
                    format!("Produtor {:02}", i)
                };
                item(i, &nome, None, true)
            })
            .collect();
        let expected = items.iter().filter(|i| i.nome.to_lowercase().contains("ltda")).count();

        let state = FilterState { search: "ltda".into(), ..FilterState::default() };
        let filtered = apply_filters(&items, &state, "nome");
        assert_eq!(filtered.len(), expected);
        assert!(filtered.windows(2).all(|w| locale_cmp(&w[0].nome, &w[1].nome) != Ordering::Greater));

        let page = crate::shared::list::pagination::Pagination::new(10);
        let visible = page.slice(&filtered);
        assert_eq!(visible.len(), expected.min(10));
        assert_eq!(visible, &filtered[..expected.min(10)]);
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        (
            0i64..1000,
            "[a-zA-Zçã ]{0,8}",
            proptest::option::of(prop_oneof![Just("Cereais".to_string()), Just("Frutas".to_string())]),
            any::<bool>(),
            proptest::collection::vec(prop_oneof![Just("1".to_string()), Just("2".to_string())], 0..2),
        )
            .prop_map(|(id, nome, categoria, ativo, tags)| Item { id, nome, categoria, ativo, tags, preco: id as f64 })
    }

    fn arb_state() -> impl Strategy<Value = FilterState> {
        (
            "[a-c]{0,2}",
            prop_oneof![Just(StatusFilter::Todos), Just(StatusFilter::Ativos), Just(StatusFilter::Inativos)],
            proptest::option::of(prop_oneof![Just("Cereais".to_string()), Just("Frutas".to_string())]),
            proptest::option::of(Just("2".to_string())),
        )
            .prop_map(|(search, status, categoria, tag)| {
                let mut state = FilterState { search, status, ..FilterState::default() };
                if let Some(c) = categoria {
                    state.set_selected("categoria", c);
                }
                if let Some(t) = tag {
                    state.toggle_multi("tags", &t);
                }
                state
            })
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(items in proptest::collection::vec(arb_item(), 0..30), state in arb_state()) {
            let once = apply_filters(&items, &state, "nome");
            prop_assert_eq!(&once, &apply_filters(&items, &state, "nome"));
            prop_assert_eq!(&once, &apply_filters(&once, &state, "nome"));
        }

        #[test]
        fn prop_and_composition(items in proptest::collection::vec(arb_item(), 0..30), state in arb_state()) {
            let result = apply_filters(&items, &state, "nome");
            for it in &items {
                let search_ok = matches_search(it, &state.search);
                let status_ok = state.status.matches(it.ativo);
                let cat = state.selected_value("categoria");
                let cat_ok = cat.is_empty() || it.categoria.as_deref() == Some(cat.as_str());
                let tags_ok = match state.multi.get("tags") {
                    Some(set) if !set.is_empty() => it.tags.iter().any(|t| set.contains(t)),
                    _ => true,
                };
                let expected = search_ok && status_ok && cat_ok && tags_ok;
                prop_assert_eq!(result.iter().any(|r| r == it), expected);
            }
        }
    }
}
