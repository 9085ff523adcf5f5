//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod authenticator;
mod contribution_repository;
mod credential_repository;
mod deposit_repository;
mod expense_repository;
mod invite_repository;
mod mailer;
mod member_repository;
mod object_storage;

pub use authenticator::Authenticator;
pub use contribution_repository::ContributionRepository;
pub use credential_repository::{AdminCredential, CredentialRepository};
pub use deposit_repository::DepositRepository;
pub use expense_repository::ExpenseRepository;
pub use invite_repository::InviteKeyRepository;
pub use mailer::{EmailMessage, Mailer};
pub use member_repository::MemberRepository;
pub use object_storage::{ObjectStorage, StoredObject};
