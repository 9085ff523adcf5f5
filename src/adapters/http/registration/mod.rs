//! Public member registration endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::registration_routes;
