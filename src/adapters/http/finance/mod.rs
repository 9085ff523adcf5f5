//! Finance endpoints: ledgers, reports, receipt files.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::finance_routes;
