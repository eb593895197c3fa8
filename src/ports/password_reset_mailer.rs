//! Password reset mailer port.

use async_trait::async_trait;

use crate::domain::account::PasswordResetEmail;

/// Errors returned while sending a reset email.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MailerError {
    #[error("Mailer is not configured")]
    NotConfigured,

    #[error("Email service rejected the request: {status} {body}")]
    Rejected { status: u16, body: String },

    #[error("Email service unreachable: {0}")]
    Transport(String),
}

/// Delivers password reset emails.
#[async_trait]
pub trait PasswordResetMailer: Send + Sync {
    async fn send_reset(&self, email: &PasswordResetEmail) -> Result<(), MailerError>;
}
