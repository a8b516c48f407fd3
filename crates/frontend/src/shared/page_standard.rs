//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_escolas--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Landing page with shortcuts and counters.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Login and other session pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        let id = page_id("a004_contratos", PAGE_CAT_DETAIL);
        assert_eq!(id, "a004_contratos--detail");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("a004_contratos"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a004--custom"));
    }
}
