//! Authentication adapters.
//!
//! `JwtAuthenticator` is the production implementation of the
//! `Authenticator` port; `MockAuthenticator` backs tests.

mod jwt;
mod mock;

pub use jwt::JwtAuthenticator;
pub use mock::MockAuthenticator;
