//! HTTP handlers for member registry endpoints.

use axum::extract::{Json, Path, State};
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::{forbidden, RequireAuth};
use crate::adapters::http::state::AppState;
use crate::application::handlers::members::UpdateMemberCommand;
use crate::domain::foundation::MemberId;
use crate::domain::member::MemberUpdate;

use super::dto::MemberResponse;

/// `GET /members` - full registry listing.
pub async fn list_members(State(state): State<AppState>, RequireAuth(user): RequireAuth) -> Response {
    if !user.role.can_manage_members() {
        return forbidden();
    }

    match state.list_members_handler().handle().await {
        Ok(members) => Json(
            members
                .into_iter()
                .map(MemberResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `PUT /members/:id` - partial edit of a member record.
pub async fn update_member(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(update): Json<MemberUpdate>,
) -> Response {
    if !user.role.can_manage_members() {
        return forbidden();
    }

    let member_id: MemberId = match id.parse() {
        Ok(id) => id,
        Err(_) => {
            return (
                axum::http::StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("VALIDATION_FAILED", "Invalid member id")),
            )
                .into_response()
        }
    };

    let result = state
        .update_member_handler()
        .handle(UpdateMemberCommand { member_id, update })
        .await;

    match result {
        Ok(member) => Json(MemberResponse::from(member)).into_response(),
        Err(e) => domain_error_response(e),
    }
}
