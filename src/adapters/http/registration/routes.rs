//! Router for the public registration endpoint.

use axum::routing::post;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::register_member;

/// `POST /register-member` - public; the invite key is the gate.
pub fn registration_routes() -> Router<AppState> {
    Router::new().route("/register-member", post(register_member))
}
