//! HTTP routes for results endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::get_results;
use crate::application::AppServices;

/// Results routes. Mount behind the session gate.
pub fn results_routes() -> Router<AppServices> {
    Router::new().route("/api/results/:survey_id", get(get_results))
}
