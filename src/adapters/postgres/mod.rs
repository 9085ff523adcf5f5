//! PostgreSQL adapters.
//!
//! One repository per aggregate, all sharing a `PgPool`. Rows map to domain
//! types through `TryFrom`, with enum columns stored as lowercase text.

mod contribution_repository;
mod credential_repository;
mod deposit_repository;
mod expense_repository;
mod invite_repository;
mod member_repository;

pub use contribution_repository::PostgresContributionRepository;
pub use credential_repository::PostgresCredentialRepository;
pub use deposit_repository::PostgresDepositRepository;
pub use expense_repository::PostgresExpenseRepository;
pub use invite_repository::PostgresInviteKeyRepository;
pub use member_repository::PostgresMemberRepository;
