//! In-memory adapters.
//!
//! Map/Vec-backed implementations of the repository, mailer, and storage
//! ports. Used by unit and integration tests; the conditional consume keeps
//! the same semantics as the SQL adapter (a single guarded transition).

mod mailer;
mod repositories;
mod storage;

pub use mailer::RecordingMailer;
pub use repositories::{
    InMemoryContributionRepository, InMemoryCredentialRepository, InMemoryDepositRepository,
    InMemoryExpenseRepository, InMemoryInviteKeyRepository, InMemoryMemberRepository,
};
pub use storage::InMemoryObjectStorage;
