//! Session token port.
//!
//! One contract covers both sides of the token lifecycle: issuing a signed
//! token after login and validating the bearer token on protected routes.
//! The JWT adapter is the production implementation; tests use a mock.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, IssuedToken};

/// Issues and validates session tokens.
///
/// # Contract
///
/// Implementations must:
/// - Sign tokens with a shared secret and a 24h expiry
/// - Validate the signature and expiry on every `validate` call
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Issues a signed session token for an authenticated user.
    async fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedToken, AuthError>;

    /// Validates a raw token (without the "Bearer " prefix) and extracts the
    /// authenticated user.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticator_is_object_safe() {
        fn _accepts_dyn(_auth: &dyn Authenticator) {}
    }
}
