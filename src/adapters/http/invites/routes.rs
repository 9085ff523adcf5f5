//! Router for invite key endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{list_keys, register_key};

/// Invite key endpoints, behind the invite-issuing guard.
///
/// - `POST /invites` - register a key
/// - `GET /invites` - list keys
pub fn invite_routes() -> Router<AppState> {
    Router::new().route("/invites", post(register_key).get(list_keys))
}
