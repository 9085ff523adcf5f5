//! Invite key management (admin side).

mod list_keys;
mod register_key;

pub use list_keys::ListKeysHandler;
pub use register_key::{RegisterKeyCommand, RegisterKeyHandler};
