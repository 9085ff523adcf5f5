//! Authentication middleware and extractor.
//!
//! `auth_middleware` validates the Bearer token through the `Authenticator`
//! port and injects the `AuthenticatedUser` into request extensions. The
//! `RequireAuth` extractor reads it back in handlers; routes without a valid
//! token get 401 at extraction time. Role checks happen per route group via
//! the capability methods on `Role`.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::Authenticator;

/// Middleware state, the shared authenticator.
pub type AuthState = Arc<dyn Authenticator>;

/// Validates the `Authorization: Bearer` token when present.
///
/// A missing header passes through without injecting a user; `RequireAuth`
/// rejects such requests downstream. An invalid or expired token short
/// circuits with 401.
pub async fn auth_middleware(
    State(authenticator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match authenticator.validate(token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
            Err(e) => {
                let (status, message) = match &e {
                    AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
                    AuthError::ServiceUnavailable(detail) => {
                        tracing::error!(detail, "authenticator unavailable");
                        (StatusCode::SERVICE_UNAVAILABLE, "Authentication unavailable")
                    }
                    _ => (StatusCode::UNAUTHORIZED, "Invalid token"),
                };
                (status, Json(ErrorResponse::new("UNAUTHORIZED", message))).into_response()
            }
        },
        None => next.run(request).await,
    }
}

/// Extractor that requires an authenticated administrator.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

/// Rejection for requests with no validated user.
#[derive(Debug, Clone)]
pub struct Unauthenticated;

impl IntoResponse for Unauthenticated {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("UNAUTHORIZED", "Authentication required")),
        )
            .into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = Unauthenticated;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(Unauthenticated)
        })
    }
}

/// 403 response for a role without the required capability.
pub(crate) fn forbidden() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ErrorResponse::new(
            "FORBIDDEN",
            "Role does not permit this operation",
        )),
    )
        .into_response()
}
