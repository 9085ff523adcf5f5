//! JSON DTOs for the login endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::auth::LoginResult;

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub secret: String,
}

/// Login response body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Token expiry as Unix seconds.
    pub expires_at: i64,
    /// Wire form of the administrator's role.
    pub role: String,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token,
            expires_at: result.expires_at,
            role: result.role.as_str().to_string(),
        }
    }
}
