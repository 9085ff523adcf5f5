//! Finance ledger domain - contributions, deposits, expenses, and the
//! payment report engine.

mod contribution;
mod deposit;
mod expense;
mod report;

pub use contribution::{Contribution, ContributionStatus};
pub use deposit::Deposit;
pub use expense::Expense;
pub use report::{build_payment_report, summarize, MemberSummary};
