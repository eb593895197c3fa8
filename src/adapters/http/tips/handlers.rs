//! HTTP handlers for relationship tips endpoints.

use axum::extract::{Json, Path, Query, State};
use serde::Deserialize;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{
    GetImprovementAreasQuery, GetTipQuery, ImprovementAreasView, TipView,
};
use crate::application::AppServices;
use crate::domain::foundation::SurveyId;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreasParams {
    pub survey_id: Option<String>,
}

/// GET /api/tips/areas
pub async fn get_areas(
    State(services): State<AppServices>,
    Query(params): Query<AreasParams>,
) -> Result<Json<ImprovementAreasView>, ApiError> {
    let survey_id = params.survey_id.map(SurveyId::new).transpose()?;
    let view = services
        .improvement_areas_handler()
        .handle(GetImprovementAreasQuery { survey_id });
    Ok(Json(view))
}

/// GET /api/tips/:item/:action_type
///
/// Unknown items or action types answer with an empty tip, not 404.
pub async fn get_tip(
    State(services): State<AppServices>,
    Path((item, action_type)): Path<(String, String)>,
) -> Json<TipView> {
    Json(services.tip_handler().handle(GetTipQuery { item, action_type }))
}
