//! HTTP routes for navigation and health endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{health, resolve_navigation};
use crate::application::AppServices;

/// Public routes.
pub fn navigation_routes() -> Router<AppServices> {
    Router::new()
        .route("/health", get(health))
        .route("/api/navigation", get(resolve_navigation))
}
