//! HTTP handlers for profile and invitation endpoints.

use axum::extract::{Json, State};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::CreateInvitationQuery;
use crate::application::AppServices;
use crate::domain::account::Invitation;
use crate::domain::user::{ProfilePatch, User};

/// PATCH /api/profile
///
/// Merges the present fields into the profile and returns the updated user.
pub async fn update_profile(
    State(services): State<AppServices>,
    RequireAuth(_): RequireAuth,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<User>, ApiError> {
    if patch.is_empty() {
        return Err(ApiError::BadRequest("No profile fields given".to_string()));
    }
    services.auth.update_profile(patch).await;

    services
        .auth
        .current_user()
        .map(Json)
        .ok_or(ApiError::Unauthenticated)
}

/// GET /api/invite
pub async fn get_invitation(
    State(services): State<AppServices>,
    RequireAuth(user): RequireAuth,
) -> Json<Invitation> {
    let invitation = services
        .invitation_handler()
        .handle(CreateInvitationQuery { user: Some(user) });
    Json(invitation)
}
