//! ListMembersHandler - Lists the member registry.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::member::Member;
use crate::ports::MemberRepository;

/// Handler for the member listing, most recent registration first.
pub struct ListMembersHandler {
    members: Arc<dyn MemberRepository>,
}

impl ListMembersHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(&self) -> Result<Vec<Member>, DomainError> {
        self.members.list().await
    }
}
