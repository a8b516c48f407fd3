use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error body returned by the backend on rejected requests
///
/// `dependencias` is only present when a delete is blocked by related records,
/// e.g. `{"produtos": 3, "pedidos": 1}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub dependencias: Option<BTreeMap<String, u64>>,
}

impl ApiErrorBody {
    /// Dependencies with a non-zero count
    pub fn blocking_dependencies(&self) -> Vec<(String, u64)> {
        self.dependencias
            .as_ref()
            .map(|deps| {
                deps.iter()
                    .filter(|(_, count)| **count > 0)
                    .map(|(name, count)| (name.clone(), *count))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dependency_payload() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"message":"Contrato possui dependências","dependencias":{"produtos":3,"pedidos":0}}"#,
        )
        .unwrap();
        assert_eq!(body.message.as_deref(), Some("Contrato possui dependências"));
        assert_eq!(body.blocking_dependencies(), vec![("produtos".to_string(), 3)]);
    }

    #[test]
    fn test_parse_empty_body() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body, ApiErrorBody::default());
        assert!(body.blocking_dependencies().is_empty());
    }
}
