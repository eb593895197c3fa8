//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `StateStorage` - Named partitions holding persisted store state
//! - `AuthBackend` - Login and registration
//! - `SurveyProvider` - Survey catalog, response intake and results
//! - `PasswordResetMailer` - Delivery of password reset emails

mod auth_backend;
mod password_reset_mailer;
mod state_storage;
mod survey_provider;

pub use auth_backend::{AuthBackend, AuthBackendError, Credentials, Registration};
pub use password_reset_mailer::{MailerError, PasswordResetMailer};
pub use state_storage::{
    validate_partition, StateStorage, StateStorageError, AUTH_PARTITION, SURVEY_PARTITION,
};
pub use survey_provider::{SurveyProvider, SurveyProviderError};
