//! HTTP handlers for authentication endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::RequestPasswordResetCommand;
use crate::application::AppServices;
use crate::ports::Registration;

use super::dto::{ForgotPasswordForm, LoginForm, RegisterForm, ResetOutcome, SessionResponse};

/// Whether the store now holds a session for `email`.
fn signed_in_as(services: &AppServices, email: &str) -> Option<SessionResponse> {
    let state = services.auth.snapshot();
    let matches = state.is_authenticated
        && state.user.as_ref().is_some_and(|u| u.email == email);
    matches.then(|| state.into())
}

/// POST /api/auth/login
pub async fn login(
    State(services): State<AppServices>,
    Json(form): Json<LoginForm>,
) -> Result<Json<SessionResponse>, ApiError> {
    form.validate()?;

    let email = form.email.trim();
    services.auth.login(email, &form.password).await;

    signed_in_as(&services, email)
        .map(Json)
        .ok_or_else(|| ApiError::Unauthorized("Login failed".to_string()))
}

/// POST /api/auth/register
pub async fn register(
    State(services): State<AppServices>,
    Json(form): Json<RegisterForm>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    form.validate()?;

    let email = form.email.trim().to_string();
    services
        .auth
        .register(Registration {
            email: email.clone(),
            password: form.password,
            name: form.name.trim().to_string(),
            family_code: form.family_code.filter(|c| !c.trim().is_empty()),
        })
        .await;

    signed_in_as(&services, &email)
        .map(|session| (StatusCode::CREATED, Json(session)))
        .ok_or_else(|| ApiError::BadRequest("Registration failed".to_string()))
}

/// POST /api/auth/logout
pub async fn logout(State(services): State<AppServices>) -> StatusCode {
    services.auth.logout().await;
    StatusCode::NO_CONTENT
}

/// GET /api/auth/session
pub async fn session(State(services): State<AppServices>) -> Json<SessionResponse> {
    Json(services.auth.snapshot().into())
}

/// POST /api/auth/forgot-password
pub async fn forgot_password(
    State(services): State<AppServices>,
    Json(form): Json<ForgotPasswordForm>,
) -> Result<Json<ResetOutcome>, ApiError> {
    let outcome = services
        .password_reset_handler()
        .handle(RequestPasswordResetCommand { email: form.email })
        .await?;
    Ok(Json(outcome))
}
