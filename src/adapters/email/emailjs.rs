//! EmailJS Mailer - sends password reset emails through the EmailJS REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = EmailJsConfig::new(service_id, template_id, public_key)
//!     .with_base_url("https://api.emailjs.com");
//!
//! let mailer = EmailJsMailer::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::domain::account::PasswordResetEmail;
use crate::ports::{MailerError, PasswordResetMailer};

pub const DEFAULT_EMAILJS_URL: &str = "https://api.emailjs.com";

#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    public_key: Secret<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl EmailJsConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: Secret<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key,
            base_url: DEFAULT_EMAILJS_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn public_key(&self) -> &str {
        self.public_key.expose_secret()
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a PasswordResetEmail,
}

pub struct EmailJsMailer {
    config: EmailJsConfig,
    client: Client,
}

impl EmailJsMailer {
    pub fn new(config: EmailJsConfig) -> Result<Self, MailerError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MailerError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn send_url(&self) -> String {
        format!("{}/api/v1.0/email/send", self.config.base_url.trim_end_matches('/'))
    }

    fn to_request<'a>(&'a self, email: &'a PasswordResetEmail) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: self.config.public_key(),
            template_params: email,
        }
    }
}

#[async_trait]
impl PasswordResetMailer for EmailJsMailer {
    async fn send_reset(&self, email: &PasswordResetEmail) -> Result<(), MailerError> {
        let response = self
            .client
            .post(self.send_url())
            .json(&self.to_request(email))
            .send()
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(to = %email.to_email, "password reset email accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(MailerError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
