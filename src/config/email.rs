//! Email configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Resend)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key
    pub resend_api_key: SecretString,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Address notified of each new registration
    pub notify_email: String,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.resend_api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("RESEND_API_KEY"));
        }
        if !self.resend_api_key.expose_secret().starts_with("re_") {
            return Err(ValidationError::InvalidResendKey);
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if !self.notify_email.contains('@') {
            return Err(ValidationError::InvalidNotifyEmail);
        }
        Ok(())
    }
}

fn default_from_email() -> String {
    "noreply@bandahub.org".to_string()
}

fn default_from_name() -> String {
    "Banda Hub".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> EmailConfig {
        EmailConfig {
            resend_api_key: SecretString::new("re_abcd1234".to_string()),
            from_email: default_from_email(),
            from_name: default_from_name(),
            notify_email: "secretaria@bandahub.org".to_string(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn from_header_combines_name_and_address() {
        assert_eq!(valid().from_header(), "Banda Hub <noreply@bandahub.org>");
    }

    #[test]
    fn rejects_wrong_api_key_prefix() {
        let mut config = valid();
        config.resend_api_key = SecretString::new("sk_xxx".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_invalid_notify_email() {
        let mut config = valid();
        config.notify_email = "not-an-address".to_string();
        assert!(config.validate().is_err());
    }
}
