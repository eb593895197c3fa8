//! HTTP routes for survey endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    get_progress, get_survey, list_surveys, reset_answers, set_answer, set_page, submit_response,
};
use crate::application::AppServices;

/// Survey routes. Mount behind the session gate.
pub fn survey_routes() -> Router<AppServices> {
    Router::new()
        .route("/api/surveys", get(list_surveys))
        .route("/api/surveys/progress", get(get_progress))
        .route("/api/surveys/page", put(set_page))
        .route("/api/surveys/answers", put(set_answer).delete(reset_answers))
        .route("/api/surveys/:id", get(get_survey))
        .route("/api/surveys/:id/responses", post(submit_response))
}
