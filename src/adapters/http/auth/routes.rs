//! Router for the login endpoint.

use axum::routing::post;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::login;

/// `POST /login` - public, rate limiting is left to the deployment edge.
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}
