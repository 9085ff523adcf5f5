//! Resend adapter for transactional email.
//!
//! Implements the `Mailer` port against the Resend HTTP API. Provider
//! responses are logged on failure; callers only ever see a `MailError`.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::config::EmailConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{EmailMessage, Mailer};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Request body for the Resend send endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// `Mailer` backed by the Resend API.
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: SecretString,
    from_header: String,
    api_url: String,
}

impl ResendMailer {
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.resend_api_key.clone(),
            from_header: config.from_header(),
            api_url: RESEND_API_URL.to_string(),
        }
    }

    /// Overrides the API URL (for tests against a local server).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), DomainError> {
        let body = SendRequest {
            from: &self.from_header,
            to: [&message.to],
            subject: &message.subject,
            html: &message.html_body,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, to = %message.to, "email send request failed");
                mail_error()
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(%status, detail, to = %message.to, "email provider rejected send");
            return Err(mail_error());
        }

        tracing::info!(to = %message.to, subject = %message.subject, "email sent");
        Ok(())
    }
}

fn mail_error() -> DomainError {
    DomainError::new(ErrorCode::MailError, "Failed to send email")
}
