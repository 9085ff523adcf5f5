//! Router for member registry endpoints.

use axum::routing::{get, put};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{list_members, update_member};

/// Member registry endpoints, behind the member-management guard.
///
/// - `GET /members` - list the registry
/// - `PUT /members/:id` - edit a member record
pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(list_members))
        .route("/members/:id", put(update_member))
}
