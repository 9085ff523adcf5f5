//! Public member self-registration.

mod register_member;

pub use register_member::{RegisterMemberCommand, RegisterMemberHandler};
