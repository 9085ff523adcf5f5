//! Member registry (admin side).

mod list_members;
mod update_member;

pub use list_members::ListMembersHandler;
pub use update_member::{UpdateMemberCommand, UpdateMemberHandler};
