//! HTTP routes for authentication endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{forgot_password, login, logout, register, session};
use crate::application::AppServices;

/// Public authentication routes.
pub fn auth_routes() -> Router<AppServices> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/session", get(session))
        .route("/api/auth/forgot-password", post(forgot_password))
}
