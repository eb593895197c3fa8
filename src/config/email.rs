//! Email configuration

use secrecy::Secret;
use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::email::{EmailJsConfig, DEFAULT_EMAILJS_URL};

/// Email configuration (EmailJS)
///
/// Without a service id, template id and public key, reset emails are only
/// logged.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EmailConfig {
    /// EmailJS service id
    pub service_id: Option<String>,

    /// EmailJS template id
    pub template_id: Option<String>,

    /// EmailJS public key
    pub public_key: Option<Secret<String>>,

    /// API base URL
    pub api_url: Option<String>,
}

impl EmailConfig {
    /// EmailJS client settings, if the service is configured
    pub fn emailjs(&self) -> Option<EmailJsConfig> {
        let (Some(service_id), Some(template_id), Some(public_key)) =
            (&self.service_id, &self.template_id, &self.public_key)
        else {
            return None;
        };

        let config = EmailJsConfig::new(service_id.as_str(), template_id.as_str(), public_key.clone());
        Some(match &self.api_url {
            Some(url) => config.with_base_url(url.as_str()),
            None => config,
        })
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let configured = [
            self.service_id.is_some(),
            self.template_id.is_some(),
            self.public_key.is_some(),
        ];
        if configured.iter().any(|c| *c) {
            if self.service_id.as_deref().map_or(true, str::is_empty) {
                return Err(ValidationError::MissingRequired("EMAIL__SERVICE_ID"));
            }
            if self.template_id.as_deref().map_or(true, str::is_empty) {
                return Err(ValidationError::MissingRequired("EMAIL__TEMPLATE_ID"));
            }
            if self.public_key.is_none() {
                return Err(ValidationError::MissingRequired("EMAIL__PUBLIC_KEY"));
            }
        }
        let url = self.api_url.as_deref().unwrap_or(DEFAULT_EMAILJS_URL);
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidEmailApiUrl);
        }
        Ok(())
    }
}
