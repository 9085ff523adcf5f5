//! Mail relay port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// An outbound email message. The sender identity comes from configuration,
/// not from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Sends transactional email.
///
/// Fire-and-wait: the send is awaited before the request completes and there
/// is no retry. A failure surfaces as `MailError` (mapped to a generic 500);
/// provider detail goes to the log, never to the caller.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), DomainError>;
}
