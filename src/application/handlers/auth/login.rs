//! LoginHandler - Exchanges administrator credentials for a session token.

use std::sync::Arc;

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode, Role};
use crate::ports::{Authenticator, CredentialRepository};

type HmacSha256 = Hmac<Sha256>;

/// Login request with plaintext credentials.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub secret: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub expires_at: i64,
    pub role: Role,
}

/// Handler for administrator login.
///
/// Secrets are never stored or compared in plaintext: the store holds a
/// peppered HMAC-SHA256 digest, and comparison is constant-time. Unknown
/// email and wrong secret produce the same error so the endpoint does not
/// leak which accounts exist.
pub struct LoginHandler {
    credentials: Arc<dyn CredentialRepository>,
    authenticator: Arc<dyn Authenticator>,
    pepper: SecretString,
}

impl LoginHandler {
    pub fn new(
        credentials: Arc<dyn CredentialRepository>,
        authenticator: Arc<dyn Authenticator>,
        pepper: SecretString,
    ) -> Self {
        Self {
            credentials,
            authenticator,
            pepper,
        }
    }

    pub async fn handle(&self, command: LoginCommand) -> Result<LoginResult, DomainError> {
        let credential = self
            .credentials
            .find_by_email(&command.email)
            .await?
            .ok_or_else(invalid_credentials)?;

        let digest = self.digest(&command.secret)?;
        let matches: bool = digest
            .as_bytes()
            .ct_eq(credential.secret_digest.as_bytes())
            .into();
        if !matches {
            return Err(invalid_credentials());
        }

        let user = AuthenticatedUser::new(credential.id, credential.email, credential.role);
        let issued = self.authenticator.issue(&user).await.map_err(|e| {
            tracing::error!(error = %e, "token issuance failed");
            DomainError::new(ErrorCode::InternalError, "Could not issue session token")
        })?;

        Ok(LoginResult {
            token: issued.token,
            expires_at: issued.expires_at,
            role: user.role,
        })
    }

    /// Hex HMAC-SHA256 of the secret under the server pepper.
    fn digest(&self, secret: &str) -> Result<String, DomainError> {
        let mut mac = HmacSha256::new_from_slice(self.pepper.expose_secret().as_bytes())
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Invalid credential pepper"))?;
        mac.update(secret.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

fn invalid_credentials() -> DomainError {
    DomainError::new(ErrorCode::Unauthorized, "Invalid credentials")
}
