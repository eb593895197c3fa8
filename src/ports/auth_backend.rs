//! Auth backend port for credential checks and account creation.
//!
//! The authentication store calls this port for every login and
//! registration. Implementations may take noticeable time; the store
//! exposes an `is_loading` flag while a call is in flight.

use async_trait::async_trait;

use crate::domain::user::User;

/// Errors returned by an auth backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthBackendError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account already exists: {0}")]
    AlreadyRegistered(String),

    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Credentials presented at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Details collected by the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    /// Household to join, from an invitation link.
    pub family_code: Option<String>,
}

/// Authenticates users and creates accounts.
///
/// # Contract
///
/// Implementations must:
/// - Return the signed-in user on success
/// - Return `AuthBackendError::InvalidCredentials` for rejected logins
/// - Return `AuthBackendError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthBackendError>;

    async fn register(&self, registration: &Registration) -> Result<User, AuthBackendError>;
}
