//! HTTP handlers for dashboard endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use axum::extract::{Json, Path, Query, State};
use serde::Deserialize;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{
    FocusActionCommand, FocusError, GetDashboardOverviewQuery, UpdateFocusProgressCommand,
};
use crate::application::AppServices;
use crate::domain::dashboard::{DashboardOverview, FocusedAction};
use crate::domain::tips::ActionType;

impl From<FocusError> for ApiError {
    fn from(error: FocusError) -> Self {
        match error {
            FocusError::EmptyActionName => ApiError::BadRequest(error.to_string()),
            FocusError::NotFound(_) => ApiError::NotFound(error.to_string()),
        }
    }
}

/// Query parameters for the dashboard overview endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardParams {
    #[serde(default)]
    pub sync_partner: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusActionRequest {
    pub action_type: ActionType,
    pub action_name: String,
}

#[derive(Debug, Deserialize)]
pub struct FocusProgressRequest {
    pub progress: i64,
}

/// GET /api/dashboard
pub async fn get_dashboard(
    State(services): State<AppServices>,
    Query(params): Query<DashboardParams>,
) -> Json<DashboardOverview> {
    let overview = services
        .dashboard_handler()
        .handle(GetDashboardOverviewQuery {
            sync_partner: params.sync_partner,
        })
        .await;
    Json(overview)
}

/// POST /api/dashboard/focus
pub async fn focus_action(
    State(services): State<AppServices>,
    Json(request): Json<FocusActionRequest>,
) -> Result<Json<Vec<FocusedAction>>, ApiError> {
    let actions = services
        .focus_action_handler()
        .handle(FocusActionCommand {
            action_type: request.action_type,
            action_name: request.action_name,
        })
        .await?;
    Ok(Json(actions))
}

/// PUT /api/dashboard/focus/:index
pub async fn update_focus_progress(
    State(services): State<AppServices>,
    Path(index): Path<usize>,
    Json(request): Json<FocusProgressRequest>,
) -> Result<Json<FocusedAction>, ApiError> {
    let action = services
        .focus_progress_handler()
        .handle(UpdateFocusProgressCommand {
            index,
            progress: request.progress,
        })
        .await?;
    Ok(Json(action))
}
