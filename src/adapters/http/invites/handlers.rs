//! HTTP handlers for invite key endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::{forbidden, RequireAuth};
use crate::adapters::http::state::AppState;
use crate::application::handlers::invites::RegisterKeyCommand;

use super::dto::{InviteKeyResponse, RegisterKeyRequest};

/// `POST /invites` - register a fresh invite key.
pub async fn register_key(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<RegisterKeyRequest>,
) -> Response {
    if !user.role.can_issue_invites() {
        return forbidden();
    }

    let result = state
        .register_key_handler()
        .handle(RegisterKeyCommand {
            key: body.key,
            issued_by: user.id,
        })
        .await;

    match result {
        Ok(key) => (StatusCode::CREATED, Json(InviteKeyResponse::from(key))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `GET /invites` - list registered keys, newest first.
pub async fn list_keys(State(state): State<AppState>, RequireAuth(user): RequireAuth) -> Response {
    if !user.role.can_issue_invites() {
        return forbidden();
    }

    match state.list_keys_handler().handle().await {
        Ok(keys) => Json(
            keys.into_iter()
                .map(InviteKeyResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => domain_error_response(e),
    }
}
