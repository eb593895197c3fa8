//! HTTP routes for profile and invitation endpoints.

use axum::routing::{get, patch};
use axum::Router;

use super::handlers::{get_invitation, update_profile};
use crate::application::AppServices;

/// Profile routes. Mount behind the session gate.
pub fn profile_routes() -> Router<AppServices> {
    Router::new()
        .route("/api/profile", patch(update_profile))
        .route("/api/invite", get(get_invitation))
}
