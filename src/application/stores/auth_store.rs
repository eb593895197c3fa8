//! Authentication store.
//!
//! Holds the signed-in user. `user` and `is_authenticated` are persisted
//! under the `auth-storage` partition; `is_loading` always starts false.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};

use super::persisted;
use crate::domain::user::{ProfilePatch, User};
use crate::ports::{AuthBackend, Credentials, Registration, StateStorage, AUTH_PARTITION};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// The persisted subset of [`AuthState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedAuth {
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    is_authenticated: bool,
}

impl From<&AuthState> for PersistedAuth {
    fn from(state: &AuthState) -> Self {
        Self {
            user: state.user.clone(),
            is_authenticated: state.is_authenticated,
        }
    }
}

pub struct AuthStore {
    state: watch::Sender<AuthState>,
    backend: Arc<dyn AuthBackend>,
    storage: Arc<dyn StateStorage>,
    /// Serialises snapshot + save so an older snapshot never lands last.
    persist_lock: Mutex<()>,
}

impl AuthStore {
    /// Creates the store, restoring persisted state from `storage`.
    pub async fn restore(backend: Arc<dyn AuthBackend>, storage: Arc<dyn StateStorage>) -> Self {
        let persisted: PersistedAuth =
            persisted::load_or_default(storage.as_ref(), AUTH_PARTITION).await;
        let (state, _) = watch::channel(AuthState {
            user: persisted.user,
            is_authenticated: persisted.is_authenticated,
            is_loading: false,
        });

        Self {
            state,
            backend,
            storage,
            persist_lock: Mutex::new(()),
        }
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    /// Signs in. Empty credentials are ignored without touching state.
    pub async fn login(&self, email: &str, password: &str) {
        if email.is_empty() || password.is_empty() {
            tracing::debug!("login ignored: empty email or password");
            return;
        }

        self.state.send_modify(|s| s.is_loading = true);
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.backend.login(&credentials).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "user logged in");
                self.state.send_modify(|s| {
                    s.user = Some(user);
                    s.is_authenticated = true;
                    s.is_loading = false;
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "login failed");
                self.state.send_modify(|s| s.is_loading = false);
            }
        }

        self.persist().await;
    }

    /// Creates an account and signs it in. All fields must be non-empty.
    pub async fn register(&self, registration: Registration) {
        if registration.email.is_empty()
            || registration.password.is_empty()
            || registration.name.is_empty()
        {
            tracing::debug!("registration ignored: missing email, password or name");
            return;
        }

        self.state.send_modify(|s| s.is_loading = true);

        match self.backend.register(&registration).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "user registered");
                self.state.send_modify(|s| {
                    s.user = Some(user);
                    s.is_authenticated = true;
                    s.is_loading = false;
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "registration failed");
                self.state.send_modify(|s| s.is_loading = false);
            }
        }

        self.persist().await;
    }

    pub async fn logout(&self) {
        self.state.send_modify(|s| {
            s.user = None;
            s.is_authenticated = false;
        });
        tracing::info!("user logged out");
        self.persist().await;
    }

    /// Merges `patch` into the signed-in user's profile. No-op without a user.
    pub async fn update_profile(&self, patch: ProfilePatch) {
        let updated = self.state.send_if_modified(|s| match s.user.as_mut() {
            Some(user) => {
                user.update_profile(patch);
                true
            }
            None => false,
        });

        if updated {
            self.persist().await;
        } else {
            tracing::debug!("profile update ignored: no signed-in user");
        }
    }

    async fn persist(&self) {
        let _guard = self.persist_lock.lock().await;
        let snapshot = PersistedAuth::from(&*self.state.borrow());
        if let Err(e) = persisted::save(self.storage.as_ref(), AUTH_PARTITION, &snapshot).await {
            tracing::error!(error = %e, "failed to persist auth state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockAuthBackend;
    use crate::adapters::storage::InMemoryStateStorage;
    use crate::ports::AuthBackendError;

    async fn store_with(backend: MockAuthBackend, storage: InMemoryStateStorage) -> AuthStore {
        AuthStore::restore(Arc::new(backend), Arc::new(storage)).await
    }

    async fn store() -> AuthStore {
        store_with(MockAuthBackend::new(), InMemoryStateStorage::new()).await
    }

    fn registration(email: &str, password: &str, name: &str) -> Registration {
        Registration {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            family_code: None,
        }
    }

    #[tokio::test]
    async fn empty_login_leaves_state_untouched() {
        let store = store().await;

        store.login("", "").await;

        assert_eq!(store.snapshot(), AuthState::default());
    }

    #[tokio::test]
    async fn login_sets_user_and_clears_loading() {
        let store = store().await;

        store.login("a@b.com", "secret").await;

        let state = store.snapshot();
        assert!(state.is_authenticated);
        assert!(!state.is_loading);
        assert_eq!(state.user.unwrap().email, "a@b.com");
    }

    #[tokio::test]
    async fn logout_resets_user() {
        let store = store().await;
        store.login("a@b.com", "secret").await;

        store.logout().await;

        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn backend_failure_is_swallowed() {
        let backend = MockAuthBackend::new()
            .with_error(AuthBackendError::ServiceUnavailable("down".to_string()));
        let store = store_with(backend, InMemoryStateStorage::new()).await;

        store.login("a@b.com", "secret").await;

        let state = store.snapshot();
        assert!(!state.is_authenticated);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn register_requires_every_field() {
        let store = store().await;

        store.register(registration("a@b.com", "secret", "")).await;
        assert!(!store.is_authenticated());

        store.register(registration("a@b.com", "secret", "花子")).await;
        let user = store.current_user().unwrap();
        assert_eq!(user.name, "花子");
        assert!(!user.profile.has_children);
    }

    #[tokio::test]
    async fn update_profile_merges_fields() {
        let store = store().await;
        store.login("a@b.com", "secret").await;

        store
            .update_profile(ProfilePatch {
                occupation: Some("会社員".to_string()),
                ..Default::default()
            })
            .await;

        let profile = store.current_user().unwrap().profile;
        assert_eq!(profile.occupation.as_deref(), Some("会社員"));
        assert_eq!(profile.age, Some(35));
    }

    #[tokio::test]
    async fn update_profile_without_user_is_noop() {
        let storage = InMemoryStateStorage::new();
        let store = store_with(MockAuthBackend::new(), storage.clone()).await;

        store
            .update_profile(ProfilePatch {
                age: Some(40),
                ..Default::default()
            })
            .await;

        assert!(store.current_user().is_none());
        assert_eq!(storage.partition_count().await, 0);
    }

    #[tokio::test]
    async fn login_is_persisted_without_loading_flag() {
        let storage = InMemoryStateStorage::new();
        let store = store_with(MockAuthBackend::new(), storage.clone()).await;
        store.login("a@b.com", "secret").await;

        let raw = storage.load(AUTH_PARTITION).await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["version"], 0);
        assert_eq!(json["state"]["isAuthenticated"], true);
        assert_eq!(json["state"]["user"]["email"], "a@b.com");
        assert!(json["state"].get("isLoading").is_none());

        let reloaded = store_with(MockAuthBackend::new(), storage).await;
        assert!(reloaded.is_authenticated());
        assert!(!reloaded.snapshot().is_loading);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store = store().await;
        let mut rx = store.subscribe();

        store.login("a@b.com", "secret").await;

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_authenticated);
    }
}
