//! Credential store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Role, UserId};

/// An administrator identity record.
///
/// `secret_digest` is the hex HMAC-SHA256 of the account secret under the
/// server pepper; the plaintext secret is never stored.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub id: UserId,
    pub email: String,
    pub secret_digest: String,
    pub role: Role,
}

/// Lookup access to administrator credentials.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Finds a credential by email. Returns `None` when no account exists;
    /// the login handler collapses that into the same error as a bad secret.
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminCredential>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CredentialRepository) {}
    }
}
