//! Email adapters.

mod resend;

pub use resend::ResendMailer;
