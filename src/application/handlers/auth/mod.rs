//! Administrator authentication.

mod login;

pub use login::{LoginCommand, LoginHandler, LoginResult};
