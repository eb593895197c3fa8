//! HTTP adapters - REST API implementations.
//!
//! Each area has its own router module; [`api_router`] mounts them, putting
//! the gated ones behind the session middleware.

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod middleware;
pub mod navigation;
pub mod profile;
pub mod results;
pub mod survey;
pub mod tips;

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::AppServices;
use crate::config::ServerConfig;

pub use error::{ApiError, ErrorResponse};

/// Builds the full API router.
pub fn api_router(services: AppServices, config: &ServerConfig) -> Router {
    let gated = Router::new()
        .merge(profile::profile_routes())
        .merge(dashboard::dashboard_routes())
        .merge(survey::survey_routes())
        .merge(results::results_routes())
        .merge(tips::tips_routes())
        .route_layer(axum::middleware::from_fn_with_state(
            services.clone(),
            middleware::require_session,
        ));

    Router::new()
        .merge(navigation::navigation_routes())
        .merge(auth::auth_routes())
        .merge(gated)
        .with_state(services)
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// Configured origins, or any origin outside production when none are set.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    if !origins.is_empty() {
        layer.allow_origin(origins)
    } else if config.is_production() {
        layer
    } else {
        layer.allow_origin(Any)
    }
}
