//! Invite key domain - single-use registration credentials.

mod key;

pub use key::{validate_format, InviteKey, MasterKeys, KEY_PREFIX, KEY_SUFFIX_LEN};
