//! Recording mailer for tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::account::PasswordResetEmail;
use crate::ports::{MailerError, PasswordResetMailer};

/// Keeps every email it is asked to send.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: RwLock<Vec<PasswordResetEmail>>,
    force_error: RwLock<Option<MailerError>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces all sends to return the specified error.
    pub fn with_error(mut self, error: MailerError) -> Self {
        *self.force_error.get_mut() = Some(error);
        self
    }

    pub async fn sent(&self) -> Vec<PasswordResetEmail> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl PasswordResetMailer for RecordingMailer {
    async fn send_reset(&self, email: &PasswordResetEmail) -> Result<(), MailerError> {
        if let Some(error) = self.force_error.read().await.clone() {
            return Err(error);
        }
        self.sent.write().await.push(email.clone());
        Ok(())
    }
}
