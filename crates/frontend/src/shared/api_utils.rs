//! API URL helpers

use super::config::config;

/// Backend on the current host, port 3000
///
/// Empty when there is no window (e.g. native test runs).
pub fn location_api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Full URL for an API path such as "/api/escolas"
pub fn api_url(path: &str) -> String {
    join_url(&config().api_base, path)
}

pub fn resource_url(collection_path: &str, id: i64) -> String {
    format!("{}/{}", collection_path.trim_end_matches('/'), id)
}

/// Nested collection such as "/api/contratos/3/produtos"
pub fn nested_path(collection_path: &str, parent_id: i64, child: &str) -> String {
    format!("{}/{}", resource_url(collection_path, parent_id), child)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(resource_url("/api/escolas", 4), "/api/escolas/4");
        assert_eq!(nested_path("/api/contratos", 3, "produtos"), "/api/contratos/3/produtos");
        assert_eq!(join_url("http://h:3000", "/api/rotas"), "http://h:3000/api/rotas");
        assert_eq!(join_url("", "api/rotas"), "/api/rotas");
    }
}
