//! Id-indexed lookup for client-side joins

use std::collections::HashMap;

use contracts::domain::common::{EntityId, EntityRecord};

pub const NO_VALUE: &str = "—";

/// Optional text for a table cell
pub fn or_dash(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NO_VALUE.to_string(),
    }
}

/// Outcome of resolving a foreign key against a loaded collection
#[derive(Debug, PartialEq)]
pub enum Resolved<'a, T> {
    Found(&'a T),
    Unresolved(EntityId),
}

/// Records of one collection indexed by id
///
/// Built once per collection load and passed down to the pages that join
/// against it.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable<T> {
    by_id: HashMap<EntityId, T>,
}

impl<T> Default for LookupTable<T> {
    fn default() -> Self {
        Self { by_id: HashMap::new() }
    }
}

impl<T: EntityRecord + Clone> LookupTable<T> {
    pub fn build(items: &[T]) -> Self {
        Self {
            by_id: items.iter().map(|item| (item.id(), item.clone())).collect(),
        }
    }

    pub fn resolve(&self, id: EntityId) -> Resolved<'_, T> {
        match self.by_id.get(&id) {
            Some(item) => Resolved::Found(item),
            None => Resolved::Unresolved(id),
        }
    }

    pub fn label_of(&self, id: EntityId) -> String {
        match self.resolve(id) {
            Resolved::Found(item) => item.label(),
            Resolved::Unresolved(id) => format!("#{} (não encontrado)", id),
        }
    }

    pub fn label_of_opt(&self, id: Option<EntityId>) -> String {
        id.map(|id| self.label_of(id)).unwrap_or_else(|| NO_VALUE.to_string())
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.by_id.get(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// `(id, label)` pairs sorted by label, for select inputs
    pub fn options(&self) -> Vec<(String, String)> {
        let mut options: Vec<(String, String)> = self
            .by_id
            .values()
            .map(|item| (item.id().to_string(), item.label()))
            .collect();
        options.sort_by(|a, b| super::filter::locale_cmp(&a.1, &b.1));
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::filter::tests::item;

    #[test]
    fn test_resolve_found_and_unresolved() {
        let table = LookupTable::build(&[item(1, "Rota Norte", None, true), item(2, "Rota Sul", None, false)]);
        assert_eq!(table.len(), 2);
        assert!(matches!(table.resolve(2), Resolved::Found(r) if r.nome == "Rota Sul"));
        assert_eq!(table.resolve(7), Resolved::Unresolved(7));
        assert_eq!(table.label_of(1), "Rota Norte");
        assert_eq!(table.label_of(7), "#7 (não encontrado)");
        assert_eq!(table.label_of_opt(None), "—");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(&Some("Centro".into())), "Centro");
        assert_eq!(or_dash(&Some("  ".into())), NO_VALUE);
        assert_eq!(or_dash(&None), NO_VALUE);
    }

    #[test]
    fn test_options_sorted_by_label() {
        let table = LookupTable::build(&[item(3, "Zebu", None, true), item(1, "Água", None, true)]);
        assert_eq!(
            table.options(),
            vec![("1".to_string(), "Água".to_string()), ("3".to_string(), "Zebu".to_string())]
        );
    }
}
