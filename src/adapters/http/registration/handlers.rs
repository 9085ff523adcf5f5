//! HTTP handlers for the public registration endpoint.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::state::AppState;
use crate::application::handlers::registration::RegisterMemberCommand;

use super::dto::{RegisterMemberRequest, RegisterMemberResponse};

/// `POST /register-member` - invite-gated self-registration.
pub async fn register_member(
    State(state): State<AppState>,
    Json(body): Json<RegisterMemberRequest>,
) -> Response {
    let (invite_key, profile) = body.into_parts();

    let result = state
        .register_member_handler()
        .handle(RegisterMemberCommand {
            invite_key,
            profile,
        })
        .await;

    match result {
        Ok(member) => (
            StatusCode::CREATED,
            Json(RegisterMemberResponse::from(member)),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}
