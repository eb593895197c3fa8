//! Mailer used when no email service is configured.

use async_trait::async_trait;

use crate::domain::account::PasswordResetEmail;
use crate::ports::{MailerError, PasswordResetMailer};

/// Logs the reset link instead of sending it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMailer;

#[async_trait]
impl PasswordResetMailer for LoggingMailer {
    async fn send_reset(&self, email: &PasswordResetEmail) -> Result<(), MailerError> {
        tracing::info!(
            to = %email.to_email,
            reset_link = %email.reset_link,
            "email service not configured; password reset email logged only"
        );
        Ok(())
    }
}
