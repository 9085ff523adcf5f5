//! Mock authenticator for tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, IssuedToken, Role, UserId};
use crate::ports::Authenticator;

/// Test `Authenticator` backed by a token map.
///
/// `validate` looks the token up in the map; unknown tokens return
/// `InvalidToken`. `issue` hands back a fixed token string regardless of the
/// user.
#[derive(Debug, Default)]
pub struct MockAuthenticator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    issued_token: String,
    issued_expires_at: i64,
}

impl MockAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose `issue` always returns the given token.
    pub fn issuing(token: impl Into<String>, expires_at: i64) -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
            issued_token: token.into(),
            issued_expires_at: expires_at,
        }
    }

    /// Adds a token that validates to the given user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.write().unwrap().insert(token.into(), user);
        self
    }

    /// Adds a token validating to a simple test administrator with the given
    /// role.
    pub fn with_admin(self, token: impl Into<String>, user_id: &str, role: Role) -> Self {
        let user = AuthenticatedUser::new(
            UserId::new(user_id).unwrap(),
            format!("{}@test.example.com", user_id),
            role,
        );
        self.with_user(token, user)
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn issue(&self, _user: &AuthenticatedUser) -> Result<IssuedToken, AuthError> {
        Ok(IssuedToken {
            token: self.issued_token.clone(),
            expires_at: self.issued_expires_at,
        })
    }

    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_token_validates_unknown_fails() {
        let auth = MockAuthenticator::new().with_admin("tok", "admin-1", Role::Admin);

        let user = auth.validate("tok").await.unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(auth.validate("other").await.is_err());
    }
}
