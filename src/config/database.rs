//! Database configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Database configuration (PostgreSQL connection)
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum pool connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum pool connections
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        Ok(())
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> DatabaseConfig {
        DatabaseConfig {
            url: "postgresql://app@localhost/banda".to_string(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
        }
    }

    #[test]
    fn accepts_postgres_urls() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn rejects_non_postgres_urls() {
        let config = DatabaseConfig {
            url: "mysql://app@localhost/banda".to_string(),
            ..valid()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_sizes() {
        let config = DatabaseConfig {
            min_connections: 20,
            max_connections: 10,
            ..valid()
        };
        assert!(config.validate().is_err());
    }
}
