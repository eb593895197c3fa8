//! RequestPasswordResetHandler - Command handler for the forgot-password form.
//!
//! Validates the address, builds a reset link with a random token and hands
//! it to the mailer. Delivery failures become a failed outcome, never an
//! error; only invalid input is rejected.

use std::sync::Arc;

use crate::domain::account::{PasswordResetEmail, ResetOutcome};
use crate::domain::forms::{FieldErrors, ForgotPasswordForm};
use crate::ports::PasswordResetMailer;

/// Command to request a password reset email.
#[derive(Debug, Clone)]
pub struct RequestPasswordResetCommand {
    pub email: String,
}

pub type RequestPasswordResetResult = ResetOutcome;

/// Handler for password reset requests.
pub struct RequestPasswordResetHandler {
    mailer: Arc<dyn PasswordResetMailer>,
    public_origin: String,
}

impl RequestPasswordResetHandler {
    pub fn new(mailer: Arc<dyn PasswordResetMailer>, public_origin: impl Into<String>) -> Self {
        Self {
            mailer,
            public_origin: public_origin.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: RequestPasswordResetCommand,
    ) -> Result<RequestPasswordResetResult, FieldErrors> {
        let form = ForgotPasswordForm { email: cmd.email };
        form.validate()?;

        // The token is only used to build the link and is never stored.
        let email = {
            let mut rng = rand::thread_rng();
            PasswordResetEmail::new(form.email.trim(), &self.public_origin, &mut rng)
        };

        match self.mailer.send_reset(&email).await {
            Ok(()) => {
                tracing::info!(to = %email.to_email, "password reset email sent");
                Ok(ResetOutcome::sent())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to send password reset email");
                Ok(ResetOutcome::failed())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::RecordingMailer;
    use crate::domain::forms::validation::EMAIL_INVALID;
    use crate::ports::MailerError;

    const ORIGIN: &str = "https://family-lab.example";

    fn command(email: &str) -> RequestPasswordResetCommand {
        RequestPasswordResetCommand {
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn sends_reset_link_for_valid_address() {
        let mailer = Arc::new(RecordingMailer::new());
        let handler = RequestPasswordResetHandler::new(mailer.clone(), ORIGIN);

        let outcome = handler.handle(command("hanako@example.com")).await.unwrap();

        assert!(outcome.sent);
        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_email, "hanako@example.com");
        assert_eq!(sent[0].to_name, "hanako");
        assert!(sent[0]
            .reset_link
            .starts_with("https://family-lab.example/reset-password/"));
    }

    #[tokio::test]
    async fn invalid_address_is_rejected_without_sending() {
        let mailer = Arc::new(RecordingMailer::new());
        let handler = RequestPasswordResetHandler::new(mailer.clone(), ORIGIN);

        let errors = handler.handle(command("not-an-email")).await.unwrap_err();

        assert_eq!(errors.email.as_deref(), Some(EMAIL_INVALID));
        assert!(mailer.sent().await.is_empty());
    }

    #[tokio::test]
    async fn delivery_failure_becomes_failed_outcome() {
        let mailer = Arc::new(RecordingMailer::new().with_error(MailerError::Transport(
            "connection refused".to_string(),
        )));
        let handler = RequestPasswordResetHandler::new(mailer, ORIGIN);

        let outcome = handler.handle(command("hanako@example.com")).await.unwrap();

        assert_eq!(outcome, ResetOutcome::failed());
    }
}
