//! Authentication types for the domain layer.
//!
//! These types represent an authenticated administrator extracted from a
//! session token. They carry no provider dependencies; the `Authenticator`
//! port populates them.

use thiserror::Error;

use super::{Role, UserId};

/// Authenticated administrator extracted from a validated session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the credential store.
    pub id: UserId,

    /// Email address from the token claims.
    pub email: String,

    /// Authorization tier from the token claims.
    pub role: Role,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }
}

/// A freshly issued session token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Signed token to hand back to the client.
    pub token: String,

    /// Expiry as Unix seconds.
    pub expires_at: i64,
}

/// Authentication errors that can occur during token issuance or validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// Supplied credentials do not match any account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token could not be produced or checked (key material, encoding).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::InvalidCredentials
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    #[test]
    fn authenticated_user_new_creates_user() {
        let user = AuthenticatedUser::new(test_user_id(), "tesouraria@banda.org", Role::Financeiro);

        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email, "tesouraria@banda.org");
        assert_eq!(user.role, Role::Financeiro);
    }

    #[test]
    fn auth_error_displays_correctly() {
        assert_eq!(format!("{}", AuthError::InvalidToken), "Invalid or expired token");
        assert_eq!(format!("{}", AuthError::TokenExpired), "Token expired");
        assert_eq!(
            format!("{}", AuthError::service_unavailable("bad key")),
            "Auth service unavailable: bad key"
        );
    }

    #[test]
    fn auth_error_requires_reauthentication_for_token_errors() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(!AuthError::service_unavailable("").requires_reauthentication());
    }
}
