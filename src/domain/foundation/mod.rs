//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the registration and finance domain.

mod auth;
mod billing_period;
mod errors;
mod ids;
mod money;
mod role;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser, IssuedToken};
pub use billing_period::{BillingPeriod, PeriodFilter};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ContributionId, DepositId, ExpenseId, MemberId, UserId};
pub use money::Money;
pub use role::Role;
pub use timestamp::Timestamp;
