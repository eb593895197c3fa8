//! HTTP handlers for navigation and health endpoints.

use axum::extract::{Json, Query, State};
use serde::{Deserialize, Serialize};

use crate::application::AppServices;
use crate::domain::navigation::{Navigation, RouteGuard};

#[derive(Debug, Deserialize)]
pub struct NavigationParams {
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/navigation?path=...
///
/// Where the client should go when navigating to `path`.
pub async fn resolve_navigation(
    State(services): State<AppServices>,
    Query(params): Query<NavigationParams>,
) -> Json<Navigation> {
    Json(RouteGuard::resolve(
        &params.path,
        services.auth.is_authenticated(),
    ))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
