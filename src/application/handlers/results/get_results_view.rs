//! GetResultsViewHandler - Query handler for the results page.
//!
//! Fetches results for one survey through the survey store and shapes them
//! into the page's read model.

use std::sync::Arc;

use crate::application::stores::{SurveyStore, SurveyStoreError};
use crate::domain::foundation::SurveyId;
use crate::domain::results::ResultsView;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResultsError {
    #[error("Survey not found: {0}")]
    SurveyNotFound(SurveyId),
}

/// Query to get the results page for a survey.
#[derive(Debug, Clone)]
pub struct GetResultsViewQuery {
    pub survey_id: SurveyId,
}

pub type GetResultsViewResult = ResultsView;

pub struct GetResultsViewHandler {
    surveys: Arc<SurveyStore>,
}

impl GetResultsViewHandler {
    pub fn new(surveys: Arc<SurveyStore>) -> Self {
        Self { surveys }
    }

    pub async fn handle(&self, query: GetResultsViewQuery) -> Result<GetResultsViewResult, ResultsError> {
        if self.surveys.snapshot().surveys.is_empty() {
            self.surveys.fetch_surveys().await;
        }
        self.surveys.fetch_results(&query.survey_id).await;

        let state = self.surveys.snapshot();
        if let Some(SurveyStoreError::SurveyNotFound { survey_id }) = &state.last_error {
            if *survey_id == query.survey_id {
                return Err(ResultsError::SurveyNotFound(survey_id.clone()));
            }
        }

        Ok(ResultsView::build(
            &query.survey_id,
            &state.surveys,
            &state.user_responses,
            state.results_for(&query.survey_id),
        ))
    }
}
