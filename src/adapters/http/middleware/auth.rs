//! Session gate middleware and extractor for axum.
//!
//! - `require_session` - Layer that rejects requests unless the auth store
//!   holds a signed-in user, and injects that user into extensions
//! - `RequireAuth` - Extractor that reads the injected user
//!
//! ```text
//! Request → require_session → injects User into extensions
//!                                    ↓
//!                            Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! The gate mirrors the page route guard: gated endpoints answer 401 with
//! a redirect to the login page.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::ApiError;
use crate::application::AppServices;
use crate::domain::user::User;

/// Rejects the request unless a user is signed in.
pub async fn require_session(
    State(services): State<AppServices>,
    mut request: Request,
    next: Next,
) -> Response {
    let state = services.auth.snapshot();
    match (state.is_authenticated, state.user) {
        (true, Some(user)) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        _ => {
            tracing::debug!(path = %request.uri().path(), "gated endpoint requested without session");
            ApiError::Unauthenticated.into_response()
        }
    }
}

/// Extractor that requires a signed-in user.
///
/// Only valid behind [`require_session`].
#[derive(Debug, Clone)]
pub struct RequireAuth(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(RequireAuth)
            .ok_or(ApiError::Unauthenticated)
    }
}
