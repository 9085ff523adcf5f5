//! Invite key aggregate.
//!
//! An invite key is a single-use credential permitting member
//! self-registration. The only legal transition is `consumed: false -> true`,
//! and it must happen at most once. Master keys live in configuration, bypass
//! consumption tracking entirely, and never appear in the store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// Required prefix for every invite key.
pub const KEY_PREFIX: &str = "BM-";

/// Required length of the alphanumeric suffix after the prefix.
pub const KEY_SUFFIX_LEN: usize = 8;

/// A single-use invite key record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteKey {
    pub key: String,
    pub consumed: bool,
    pub issued_by: UserId,
    pub consumed_by: Option<UserId>,
    pub consumed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl InviteKey {
    /// Registers a new, unconsumed key.
    ///
    /// Re-registering an existing key overwrites it in the store; that
    /// looseness is accepted rather than guarded against.
    pub fn register(key: impl Into<String>, issued_by: UserId) -> Result<Self, ValidationError> {
        let key = key.into();
        validate_format(&key)?;
        Ok(Self {
            key,
            consumed: false,
            issued_by,
            consumed_by: None,
            consumed_at: None,
            created_at: Timestamp::now(),
        })
    }
}

/// Checks that a key matches the fixed pattern: `BM-` followed by exactly
/// eight ASCII alphanumeric characters.
pub fn validate_format(key: &str) -> Result<(), ValidationError> {
    let suffix = key.strip_prefix(KEY_PREFIX).ok_or_else(|| {
        ValidationError::invalid_format("invite_key", format!("key must start with '{}'", KEY_PREFIX))
    })?;

    if suffix.len() != KEY_SUFFIX_LEN || !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::invalid_format(
            "invite_key",
            format!("key suffix must be {} alphanumeric characters", KEY_SUFFIX_LEN),
        ));
    }

    Ok(())
}

/// Fixed allow-list of master keys loaded at startup.
///
/// Master keys redeem without any store round trip and are never marked
/// consumed.
#[derive(Debug, Clone, Default)]
pub struct MasterKeys(Vec<String>);

impl MasterKeys {
    pub fn new(keys: Vec<String>) -> Self {
        Self(keys)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> UserId {
        UserId::new("admin-1").unwrap()
    }

    #[test]
    fn accepts_well_formed_keys() {
        assert!(validate_format("BM-a1b2c3d4").is_ok());
        assert!(validate_format("BM-ABCD1234").is_ok());
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(validate_format("XX-a1b2c3d4").is_err());
        assert!(validate_format("a1b2c3d4").is_err());
    }

    #[test]
    fn rejects_wrong_suffix_length() {
        assert!(validate_format("BM-short").is_err());
        assert!(validate_format("BM-toolongsuffix1").is_err());
        assert!(validate_format("BM-").is_err());
    }

    #[test]
    fn rejects_non_alphanumeric_suffix() {
        assert!(validate_format("BM-a1b2c3d!").is_err());
        assert!(validate_format("BM-a1b2 3d4").is_err());
    }

    #[test]
    fn register_starts_unconsumed() {
        let key = InviteKey::register("BM-a1b2c3d4", issuer()).unwrap();
        assert!(!key.consumed);
        assert!(key.consumed_by.is_none());
        assert!(key.consumed_at.is_none());
        assert_eq!(key.issued_by.as_str(), "admin-1");
    }

    #[test]
    fn register_rejects_malformed_keys() {
        assert!(InviteKey::register("bogus", issuer()).is_err());
    }

    #[test]
    fn master_keys_allow_list() {
        let masters = MasterKeys::new(vec!["BM-MASTER01".to_string()]);
        assert!(masters.contains("BM-MASTER01"));
        assert!(!masters.contains("BM-a1b2c3d4"));
        assert!(MasterKeys::default().is_empty());
    }
}
