//! REST client for the backend resources
//!
//! Each entity is a resource under `/api/<collection>`. Requests carry the
//! session token and the selected tenant.

use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::api_utils::{api_url, resource_url};
use super::list::query::coerce_list;

pub const NOT_FOUND_MESSAGE: &str = "Registro não encontrado.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("falha de rede: {0}")]
    Network(String),
    #[error("requisição rejeitada (HTTP {status})")]
    Rejected {
        status: u16,
        message: Option<String>,
        dependencias: Vec<(String, u64)>,
    },
    #[error("registro não encontrado")]
    NotFound,
    #[error("resposta inválida: {0}")]
    Decode(String),
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Maps a non-2xx response; unparseable bodies just lose the message
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 404 {
            return ApiError::NotFound;
        }
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
        ApiError::Rejected {
            status,
            dependencias: parsed.blocking_dependencies(),
            message: parsed.message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// Message shown to the user
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message: Some(m), .. } => m.clone(),
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ApiError::Validation(m) => m.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn dependencies(&self) -> Vec<(String, u64)> {
        match self {
            ApiError::Rejected { dependencias, .. } => dependencias.clone(),
            _ => Vec::new(),
        }
    }
}

/// Credentials attached to every request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiClient {
    token: Option<String>,
    tenant_id: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>, tenant_id: Option<String>) -> Self {
        Self { token, tenant_id }
    }

    /// Header pairs for the current session
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::new();
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }
        if let Some(tenant) = self.tenant_id.as_deref().filter(|t| !t.is_empty()) {
            headers.push(("X-Tenant-ID", tenant.to_string()));
        }
        headers
    }

    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        self.headers()
            .into_iter()
            .fold(builder, |b, (name, value)| b.header(name, &value))
    }

    pub async fn listar<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let builder = self.with_headers(Request::get(&api_url(path)));
        let response = check(builder.send().await.map_err(network)?).await?;
        let value: serde_json::Value = response.json().await.map_err(decode)?;
        coerce_list(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Auxiliary collection of a detail page; a failure degrades to unresolved labels
    pub async fn listar_ou_vazio<T: DeserializeOwned>(&self, path: &str) -> Vec<T> {
        match self.listar(path).await {
            Ok(items) => items,
            Err(e) => {
                log::warn!("GET {} failed: {}", path, e);
                Vec::new()
            }
        }
    }

    pub async fn buscar<T: DeserializeOwned>(&self, path: &str, id: EntityId) -> Result<T, ApiError> {
        let builder = self.with_headers(Request::get(&api_url(&resource_url(path, id))));
        let response = check(builder.send().await.map_err(network)?).await?;
        response.json().await.map_err(decode)
    }

    pub async fn criar<P: Serialize>(&self, path: &str, payload: &P) -> Result<(), ApiError> {
        let request = self
            .with_headers(Request::post(&api_url(path)))
            .json(payload)
            .map_err(decode)?;
        check(request.send().await.map_err(network)?).await.map(|_| ())
    }

    pub async fn editar<P: Serialize>(&self, path: &str, id: EntityId, payload: &P) -> Result<(), ApiError> {
        let request = self
            .with_headers(Request::put(&api_url(&resource_url(path, id))))
            .json(payload)
            .map_err(decode)?;
        check(request.send().await.map_err(network)?).await.map(|_| ())
    }

    /// `force` asks the backend to drop dependent records too
    pub async fn remover(&self, path: &str, id: EntityId, force: bool) -> Result<(), ApiError> {
        let builder = self.with_headers(Request::delete(&api_url(&delete_path(path, id, force))));
        check(builder.send().await.map_err(network)?).await.map(|_| ())
    }

    /// POST with a JSON answer, used by the login call
    pub async fn post_json<P: Serialize, T: DeserializeOwned>(&self, path: &str, payload: &P) -> Result<T, ApiError> {
        let request = self
            .with_headers(Request::post(&api_url(path)))
            .json(payload)
            .map_err(decode)?;
        let response = check(request.send().await.map_err(network)?).await?;
        response.json().await.map_err(decode)
    }
}

fn delete_path(path: &str, id: EntityId, force: bool) -> String {
    let url = resource_url(path, id);
    if force {
        format!("{}?force=true", url)
    } else {
        url
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn decode(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(404, r#"{"message":"x"}"#), ApiError::NotFound);

        let err = ApiError::from_status(409, r#"{"message":"Fornecedor possui contratos","dependencias":{"contratos":2}}"#);
        assert_eq!(err.user_message("Erro ao excluir."), "Fornecedor possui contratos");
        assert_eq!(err.dependencies(), vec![("contratos".to_string(), 2)]);

        let err = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(
            err,
            ApiError::Rejected { status: 500, message: None, dependencias: Vec::new() }
        );
        assert_eq!(err.user_message("Erro ao salvar."), "Erro ao salvar.");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(ApiError::NotFound.user_message("x"), NOT_FOUND_MESSAGE);
        assert_eq!(ApiError::Network("timeout".into()).user_message("Tente novamente."), "Tente novamente.");
        assert_eq!(ApiError::Validation("Data final anterior".into()).user_message("x"), "Data final anterior");
    }

    #[test]
    fn test_headers() {
        assert!(ApiClient::default().headers().is_empty());
        let client = ApiClient::new(Some("abc".into()), Some("t-1".into()));
        assert_eq!(
            client.headers(),
            vec![("Authorization", "Bearer abc".to_string()), ("X-Tenant-ID", "t-1".to_string())]
        );
    }

    #[test]
    fn test_delete_path() {
        assert_eq!(delete_path("/api/contratos", 5, false), "/api/contratos/5");
        assert_eq!(delete_path("/api/contratos", 5, true), "/api/contratos/5?force=true");
    }
}
