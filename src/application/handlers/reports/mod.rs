//! Payment reporting.

mod member_statement;
mod payment_report;

pub use member_statement::{MemberStatement, MemberStatementHandler};
pub use payment_report::{PaymentReportHandler, PaymentReportQuery};
