//! HTTP DTOs for authentication endpoints.
//!
//! Request bodies are the domain forms, so validation runs on exactly what
//! the client sent.

pub use crate::domain::account::ResetOutcome;
pub use crate::domain::forms::{ForgotPasswordForm, LoginForm, RegisterForm};

use serde::Serialize;

use crate::application::AuthState;
use crate::domain::user::User;

/// The signed-in user, as the client sees it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl From<AuthState> for SessionResponse {
    fn from(state: AuthState) -> Self {
        Self {
            user: state.user,
            is_authenticated: state.is_authenticated,
        }
    }
}
