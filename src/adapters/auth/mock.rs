//! Mock auth backend.
//!
//! Accepts any non-empty credentials after a simulated delay and answers
//! with a fixed test user, so the application can run without a real
//! identity service.
//!
//! # Example
//!
//! ```ignore
//! use family_lab::adapters::auth::MockAuthBackend;
//!
//! let backend = MockAuthBackend::new().with_latency(Duration::from_millis(1000));
//! let user = backend.login(&credentials).await?;
//! assert_eq!(user.name, "Test User");
//! ```

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::sleep;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserProfile};
use crate::ports::{AuthBackend, AuthBackendError, Credentials, Registration};

/// Id of the user every successful login returns.
pub const MOCK_USER_ID: &str = "1";
pub const MOCK_USER_NAME: &str = "Test User";

/// Mock auth backend for development and tests.
#[derive(Debug, Default)]
pub struct MockAuthBackend {
    /// Simulated round-trip time
    latency: Duration,
    /// Optional error to return for all calls (for error testing)
    force_error: RwLock<Option<AuthBackendError>>,
}

impl MockAuthBackend {
    /// Creates a mock backend that answers immediately.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Forces all calls to return the specified error.
    pub fn with_error(mut self, error: AuthBackendError) -> Self {
        *self.force_error.get_mut() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub async fn clear_error(&self) {
        *self.force_error.write().await = None;
    }

    async fn simulate_call(&self) -> Result<(), AuthBackendError> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        match self.force_error.read().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn mock_user(email: &str) -> Result<User, AuthBackendError> {
        let id = UserId::new(MOCK_USER_ID)
            .map_err(|e| AuthBackendError::ServiceUnavailable(e.to_string()))?;
        Ok(User::new(id, email, MOCK_USER_NAME).with_profile(UserProfile {
            has_children: false,
            age: Some(35),
            marriage_years: Some(5),
            ..Default::default()
        }))
    }
}

#[async_trait]
impl AuthBackend for MockAuthBackend {
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthBackendError> {
        self.simulate_call().await?;

        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(AuthBackendError::InvalidCredentials);
        }
        Self::mock_user(&credentials.email)
    }

    async fn register(&self, registration: &Registration) -> Result<User, AuthBackendError> {
        self.simulate_call().await?;

        if registration.email.is_empty()
            || registration.password.is_empty()
            || registration.name.is_empty()
        {
            return Err(AuthBackendError::InvalidCredentials);
        }

        let user = User::new(UserId::generate(), &registration.email, &registration.name);
        Ok(match registration.family_code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => user.with_family_id(code),
            _ => user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Role;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn registration(family_code: Option<&str>) -> Registration {
        Registration {
            email: "new@example.com".to_string(),
            password: "secret".to_string(),
            name: "新規ユーザー".to_string(),
            family_code: family_code.map(String::from),
        }
    }

    #[tokio::test]
    async fn login_returns_fixed_test_user() {
        let backend = MockAuthBackend::new();

        let user = backend.login(&credentials("a@b.com", "secret")).await.unwrap();

        assert_eq!(user.id.as_str(), "1");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.name, "Test User");
        assert_eq!(user.role, Role::User);
        assert!(!user.profile.has_children);
        assert_eq!(user.profile.age, Some(35));
        assert_eq!(user.profile.marriage_years, Some(5));
    }

    #[tokio::test]
    async fn login_rejects_empty_credentials() {
        let backend = MockAuthBackend::new();
        let result = backend.login(&credentials("", "secret")).await;
        assert_eq!(result.unwrap_err(), AuthBackendError::InvalidCredentials);
    }

    #[tokio::test]
    async fn register_creates_fresh_user_with_empty_profile() {
        let backend = MockAuthBackend::new();

        let first = backend.register(&registration(None)).await.unwrap();
        let second = backend.register(&registration(None)).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "新規ユーザー");
        assert_eq!(first.profile, UserProfile::default());
        assert!(first.family_id.is_none());
    }

    #[tokio::test]
    async fn register_joins_invited_household() {
        let backend = MockAuthBackend::new();
        let user = backend.register(&registration(Some("FAM-ABC123"))).await.unwrap();
        assert_eq!(user.family_id.as_deref(), Some("FAM-ABC123"));
    }

    #[tokio::test]
    async fn forced_error_is_returned_until_cleared() {
        let backend = MockAuthBackend::new()
            .with_error(AuthBackendError::ServiceUnavailable("down".to_string()));

        assert!(backend.login(&credentials("a@b.com", "secret")).await.is_err());

        backend.clear_error().await;
        assert!(backend.login(&credentials("a@b.com", "secret")).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn login_waits_for_latency() {
        let backend = MockAuthBackend::new().with_latency(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();

        backend.login(&credentials("a@b.com", "secret")).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
