//! Client configuration
//!
//! Resolved once on first access. The API base can be fixed at build time
//! with `MERENDA_API_BASE`; otherwise the backend is expected on the current
//! host at port 3000.

use once_cell::sync::Lazy;

pub const ROWS_PER_PAGE_OPTIONS: [usize; 4] = [5, 10, 25, 50];
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;
pub const SEARCH_DEBOUNCE_MS: u32 = 250;
pub const EXPIRY_WARNING_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub default_rows_per_page: usize,
    pub rows_per_page_options: Vec<usize>,
    pub search_debounce_ms: u32,
    pub expiry_warning_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            default_rows_per_page: DEFAULT_ROWS_PER_PAGE,
            rows_per_page_options: ROWS_PER_PAGE_OPTIONS.to_vec(),
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            expiry_warning_days: EXPIRY_WARNING_DAYS,
        }
    }
}

impl AppConfig {
    fn load() -> Self {
        let api_base = match option_env!("MERENDA_API_BASE") {
            Some(base) => normalize_base(base),
            None => super::api_utils::location_api_base(),
        };
        log::debug!("api base: {}", api_base);
        Self { api_base, ..Self::default() }
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::load);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.default_rows_per_page, 10);
        assert!(cfg.rows_per_page_options.contains(&cfg.default_rows_per_page));
        assert_eq!(cfg.search_debounce_ms, 250);
        assert_eq!(cfg.expiry_warning_days, 30);
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(" http://api.local:3000/ "), "http://api.local:3000");
    }
}
