//! HTTP handlers for survey endpoints.

use axum::body::Bytes;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::AppServices;
use crate::domain::foundation::{DomainError, SurveyId};
use crate::domain::survey::{Survey, SurveyResponse};

use super::dto::{
    ProgressResponse, SetAnswerRequest, SetAnswerResponse, SetPageRequest, SubmitResponseRequest,
    SubmitResponseResponse,
};

/// GET /api/surveys
pub async fn list_surveys(State(services): State<AppServices>) -> Json<Vec<Survey>> {
    services.surveys.fetch_surveys().await;
    Json(services.surveys.snapshot().surveys)
}

/// GET /api/surveys/:id
pub async fn get_survey(
    State(services): State<AppServices>,
    Path(survey_id): Path<String>,
) -> Result<Json<Survey>, ApiError> {
    let survey_id = SurveyId::new(survey_id)?;
    services.surveys.fetch_survey_by_id(&survey_id).await;

    services
        .surveys
        .snapshot()
        .current_survey
        .map(Json)
        .ok_or_else(|| DomainError::survey_not_found(&survey_id).into())
}

/// GET /api/surveys/progress
pub async fn get_progress(State(services): State<AppServices>) -> Json<ProgressResponse> {
    let state = services.surveys.snapshot();
    Json(ProgressResponse {
        current_page: state.current_page,
        answers: state.answers,
    })
}

/// PUT /api/surveys/page
pub async fn set_page(
    State(services): State<AppServices>,
    Json(request): Json<SetPageRequest>,
) -> Json<ProgressResponse> {
    services.surveys.set_current_page(request.page).await;
    get_progress(State(services)).await
}

/// PUT /api/surveys/answers
pub async fn set_answer(
    State(services): State<AppServices>,
    Json(request): Json<SetAnswerRequest>,
) -> Result<Json<SetAnswerResponse>, ApiError> {
    let key = request.key.trim();
    if key.is_empty() {
        return Err(ApiError::BadRequest("Answer key must not be empty".to_string()));
    }
    let value = services.surveys.set_answer(key, request.value).await;
    Ok(Json(SetAnswerResponse {
        key: key.to_string(),
        value,
    }))
}

/// DELETE /api/surveys/answers
pub async fn reset_answers(State(services): State<AppServices>) -> StatusCode {
    services.surveys.reset_answers().await;
    StatusCode::NO_CONTENT
}

/// POST /api/surveys/:id/responses
///
/// An empty body submits the scratch answers. A body that is not a valid
/// [`SubmitResponseRequest`] is rejected, as is a submission with no answers.
pub async fn submit_response(
    State(services): State<AppServices>,
    RequireAuth(user): RequireAuth,
    Path(survey_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<SubmitResponseResponse>), ApiError> {
    let survey_id = SurveyId::new(survey_id)?;
    if services.catalog.get(&survey_id).is_none() {
        return Err(DomainError::survey_not_found(&survey_id).into());
    }

    let accepted = match parse_submission(&body)? {
        Some(request) => {
            if request.answers.is_empty() {
                return Err(ApiError::BadRequest("Response has no answers".to_string()));
            }
            services
                .surveys
                .submit_response(SurveyResponse::new(survey_id, user.id, request.answers))
                .await
        }
        None => {
            if services.surveys.snapshot().surveys.is_empty() {
                services.surveys.fetch_surveys().await;
            }
            services.surveys.submit_answers(&survey_id, user.id).await
        }
    };

    if !accepted {
        return Err(ApiError::BadRequest("Response was not accepted".to_string()));
    }
    Ok((
        StatusCode::CREATED,
        Json(SubmitResponseResponse {
            accepted,
            response_count: services.surveys.snapshot().user_responses.len(),
        }),
    ))
}

fn parse_submission(body: &[u8]) -> Result<Option<SubmitResponseRequest>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| ApiError::BadRequest(format!("Invalid response body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_means_scratch_answers() {
        assert!(parse_submission(b"").unwrap().is_none());
        assert!(parse_submission(b"  \n").unwrap().is_none());
    }

    #[test]
    fn mistyped_score_is_rejected() {
        let body = br#"{"answers":[{"questionId":"q1","expectation":"high","reality":2}]}"#;
        assert!(matches!(parse_submission(body), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn well_formed_body_is_parsed() {
        let body = br#"{"answers":[{"questionId":"q1","expectation":4,"reality":2}]}"#;
        let request = parse_submission(body).unwrap().unwrap();
        assert_eq!(request.answers.len(), 1);
    }
}
