//! Object storage configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Object storage configuration (Supabase Storage bucket)
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage API base URL, e.g. `https://xyz.supabase.co/storage/v1`
    pub base_url: String,

    /// Bucket holding receipt files
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Service key with write access to the bucket
    pub service_key: SecretString,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE_BASE_URL"));
        }
        if self.service_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE_SERVICE_KEY"));
        }
        if *environment == Environment::Production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::StorageUrlMustBeHttps);
        }
        Ok(())
    }
}

fn default_bucket() -> String {
    "receipts".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> StorageConfig {
        StorageConfig {
            base_url: "https://xyz.supabase.co/storage/v1".to_string(),
            bucket: default_bucket(),
            service_key: SecretString::new("service-key".to_string()),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid().validate(&Environment::Production).is_ok());
    }

    #[test]
    fn production_requires_https() {
        let mut config = valid();
        config.base_url = "http://localhost:54321/storage/v1".to_string();
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(config.validate(&Environment::Production).is_err());
    }

    #[test]
    fn default_bucket_is_receipts() {
        assert_eq!(default_bucket(), "receipts");
    }
}
