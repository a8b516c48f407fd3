use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::http::{ApiClient, ApiError};

pub const LOGIN_PATH: &str = "/api/auth/login";

/// Login with e-mail and password
pub async fn login(email: String, senha: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, senha };
    ApiClient::default().post_json(LOGIN_PATH, &request).await
}
