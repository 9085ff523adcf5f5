//! Member registry repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::member::Member;

/// Persistence for member records.
///
/// Creation is append-only; there is deliberately no delete operation.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Persists a newly registered member.
    async fn create(&self, member: &Member) -> Result<(), DomainError>;

    /// Replaces an existing member record after an authorized edit.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the member does not exist
    async fn update(&self, member: &Member) -> Result<(), DomainError>;

    /// Finds a member by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError>;

    /// Lists all members, most recent registration first.
    async fn list(&self) -> Result<Vec<Member>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MemberRepository) {}
    }
}
