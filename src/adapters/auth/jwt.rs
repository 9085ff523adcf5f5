//! HS256 JWT adapter for session tokens.
//!
//! Implements the `Authenticator` port with a shared-secret HS256 token.
//! Claims carry the user ID, email, and role; expiry comes from the
//! configured token TTL. There is no refresh flow, clients log in again
//! after expiry.

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, IssuedToken, Role, UserId};
use crate::ports::Authenticator;

/// Claims carried in a session token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject, the administrator's user ID.
    sub: String,
    /// Email address of the administrator.
    email: String,
    /// Wire form of the authorization role.
    role: String,
    /// Issued-at, Unix seconds.
    iat: i64,
    /// Expiry, Unix seconds.
    exp: i64,
}

/// Production `Authenticator` backed by `jsonwebtoken`.
pub struct JwtAuthenticator {
    secret: SecretString,
    token_ttl_secs: u64,
}

impl JwtAuthenticator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            token_ttl_secs: config.token_ttl_secs,
        }
    }
}

#[async_trait]
impl Authenticator for JwtAuthenticator {
    async fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedToken, AuthError> {
        let now = Utc::now().timestamp();
        let expires_at = now + self.token_ttl_secs as i64;
        let claims = Claims {
            sub: user.id.as_str().to_string(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            iat: now,
            exp: expires_at,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

        let id = UserId::new(data.claims.sub).map_err(|_| AuthError::InvalidToken)?;
        let role: Role = data.claims.role.parse().map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthenticatedUser::new(id, data.claims.email, role))
    }
}
