//! Per-entity wiring of the generic list page

use contracts::domain::common::EntityRecord;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::filter::Listable;

/// Collection shown on a list page
pub trait ListResource: 'static {
    type Item: Listable + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static;

    fn path() -> String {
        Self::Item::api_path()
    }

    fn default_sort() -> &'static str {
        "nome"
    }

    /// Static message shown when the collection cannot be loaded
    fn load_error() -> String {
        format!(
            "Erro ao carregar {}. Tente novamente.",
            Self::Item::list_name().to_lowercase()
        )
    }
}

/// Collection editable through the create/edit dialog
pub trait CrudResource: ListResource {
    type Form: Clone + Default + PartialEq + Send + Sync + 'static;
    type Payload: Serialize + 'static;

    /// Edit pre-fill; absent optionals become empty strings
    fn form_from(item: &Self::Item) -> Self::Form;

    /// Entity checks and conversion, run before any network call
    fn to_payload(form: &Self::Form) -> Result<Self::Payload, String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::filter::tests::Item;

    struct Itens;

    impl ListResource for Itens {
        type Item = Item;
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Itens::path(), "/api/itens");
        assert_eq!(Itens::load_error(), "Erro ao carregar itens. Tente novamente.");
        assert_eq!(Itens::default_sort(), "nome");
    }
}
