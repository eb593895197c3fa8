//! HTTP routes for relationship tips endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_areas, get_tip};
use crate::application::AppServices;

/// Tips routes. Mount behind the session gate.
pub fn tips_routes() -> Router<AppServices> {
    Router::new()
        .route("/api/tips/areas", get(get_areas))
        .route("/api/tips/:item/:action_type", get(get_tip))
}
