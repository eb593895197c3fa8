//! HTTP routes for dashboard endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{focus_action, get_dashboard, update_focus_progress};
use crate::application::AppServices;

/// Dashboard routes. Mount behind the session gate.
pub fn dashboard_routes() -> Router<AppServices> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/dashboard/focus", post(focus_action))
        .route("/api/dashboard/focus/:index", put(update_focus_progress))
}
