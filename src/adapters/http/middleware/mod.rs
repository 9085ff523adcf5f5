//! HTTP middleware.

mod auth;

pub use auth::{auth_middleware, AuthState, RequireAuth};
pub(crate) use auth::forbidden;
