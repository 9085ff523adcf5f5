//! Member registry domain.

mod member;

pub use member::{Member, MemberProfile, MemberUpdate};
