//! HTTP handlers for the login endpoint.

use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::state::AppState;
use crate::application::handlers::auth::LoginCommand;

use super::dto::{LoginRequest, LoginResponse};

/// `POST /login` - exchange credentials for a session token.
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginRequest>) -> Response {
    let result = state
        .login_handler()
        .handle(LoginCommand {
            email: body.email,
            secret: body.secret,
        })
        .await;

    match result {
        Ok(result) => Json(LoginResponse::from(result)).into_response(),
        Err(e) => domain_error_response(e),
    }
}
