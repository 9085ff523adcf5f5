//! UpdateMemberHandler - Applies an authorized partial edit to a member.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::domain::member::{Member, MemberUpdate};
use crate::ports::MemberRepository;

/// Partial member edit.
#[derive(Debug, Clone)]
pub struct UpdateMemberCommand {
    pub member_id: MemberId,
    pub update: MemberUpdate,
}

/// Handler for member edits. Identity, terms acceptance, and the submission
/// timestamp cannot be changed through this path.
pub struct UpdateMemberHandler {
    members: Arc<dyn MemberRepository>,
}

impl UpdateMemberHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, command: UpdateMemberCommand) -> Result<Member, DomainError> {
        let mut member = self
            .members
            .find_by_id(&command.member_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::MemberNotFound, "Member not found"))?;

        member.apply_update(command.update)?;
        self.members.update(&member).await?;
        Ok(member)
    }
}
