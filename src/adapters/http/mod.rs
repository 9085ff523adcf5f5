//! HTTP adapters - the REST API surface.
//!
//! Concerns get their own dto/handlers/routes modules; `api_router` mounts
//! them all under `/api`. The login and registration endpoints are public,
//! everything else sits behind the auth middleware plus a per-group role
//! guard.

pub mod auth;
pub mod error;
pub mod finance;
pub mod invites;
pub mod members;
pub mod middleware;
pub mod registration;
pub mod state;

pub use state::AppState;

use axum::middleware::from_fn_with_state;
use axum::Router;

use middleware::{auth_middleware, AuthState};

/// Builds the `/api` router over the shared state.
pub fn api_router(state: AppState) -> Router {
    let auth_state: AuthState = state.authenticator.clone();

    let protected = Router::new()
        .merge(members::member_routes())
        .merge(invites::invite_routes())
        .merge(finance::finance_routes())
        .layer(from_fn_with_state(auth_state, auth_middleware));

    let api = Router::new()
        .merge(auth::auth_routes())
        .merge(registration::registration_routes())
        .merge(protected);

    Router::new().nest("/api", api).with_state(state)
}
