//! HTTP handlers for results endpoints.

use axum::extract::{Json, Path, State};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{GetResultsViewQuery, ResultsError};
use crate::application::AppServices;
use crate::domain::foundation::{DomainError, SurveyId};
use crate::domain::results::ResultsView;

impl From<ResultsError> for ApiError {
    fn from(error: ResultsError) -> Self {
        match error {
            ResultsError::SurveyNotFound(survey_id) => {
                DomainError::survey_not_found(&survey_id).into()
            }
        }
    }
}

/// GET /api/results/:survey_id
pub async fn get_results(
    State(services): State<AppServices>,
    Path(survey_id): Path<String>,
) -> Result<Json<ResultsView>, ApiError> {
    let survey_id = SurveyId::new(survey_id)?;
    let view = services
        .results_handler()
        .handle(GetResultsViewQuery { survey_id })
        .await?;
    Ok(Json(view))
}
