//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration (JWT signing, credential pepper)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for signing session tokens (HS256)
    pub jwt_secret: SecretString,

    /// Server pepper mixed into credential digests
    pub credential_pepper: SecretString,

    /// Token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if self.jwt_secret.expose_secret().len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if self.credential_pepper.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("CREDENTIAL_PEPPER"));
        }
        if self.token_ttl_secs == 0 {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

/// 24 hours, per the session contract.
fn default_token_ttl() -> u64 {
    86_400
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: SecretString::new(secret.to_string()),
            credential_pepper: SecretString::new("pepper".to_string()),
            token_ttl_secs: default_token_ttl(),
        }
    }

    #[test]
    fn default_ttl_is_24_hours() {
        assert_eq!(default_token_ttl(), 24 * 60 * 60);
    }

    #[test]
    fn rejects_short_secrets() {
        assert!(config("short").validate().is_err());
    }

    #[test]
    fn accepts_long_secrets() {
        assert!(config("0123456789abcdef0123456789abcdef").validate().is_ok());
    }

    #[test]
    fn rejects_zero_ttl() {
        let mut c = config("0123456789abcdef0123456789abcdef");
        c.token_ttl_secs = 0;
        assert!(c.validate().is_err());
    }
}
