//! Member registry endpoints (admin side).

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::member_routes;
