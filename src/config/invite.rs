//! Invite key configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::invite::{self, MasterKeys};

/// Invite key configuration (master key allow-list)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InviteConfig {
    /// Comma-separated master keys. Master keys bypass consumption tracking
    /// and are reusable; keep this list short.
    #[serde(default)]
    pub master_keys: Option<String>,
}

impl InviteConfig {
    /// Parse the allow-list into domain form.
    pub fn master_keys(&self) -> MasterKeys {
        MasterKeys::new(
            self.master_keys
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Validate invite configuration
    ///
    /// Master keys must themselves match the invite key format, otherwise a
    /// typo here silently disables the key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for key in self
            .master_keys
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
        {
            invite::validate_format(key)
                .map_err(|_| ValidationError::InvalidMasterKey(key.to_string()))?;
        }
        Ok(())
    }
}
