//! Invite key endpoints (admin side).

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::invite_routes;
