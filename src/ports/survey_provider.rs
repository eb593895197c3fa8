//! Survey provider port - the catalog, response intake and results.

use async_trait::async_trait;

use crate::domain::foundation::{SurveyId, UserId};
use crate::domain::results::SurveyResults;
use crate::domain::survey::{Survey, SurveyResponse};

/// Errors returned by a survey provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SurveyProviderError {
    #[error("Survey not found: {0}")]
    SurveyNotFound(SurveyId),

    #[error("Response rejected: {0}")]
    InvalidResponse(String),

    #[error("Survey service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Serves surveys and turns submitted responses into results.
///
/// # Contract
///
/// - `submit_response` rejects responses for surveys not in the catalog
/// - `fetch_results` returns results scoped to `survey_id`, or
///   `SurveyNotFound` for an unknown survey. `response` is the caller's
///   latest submission for that survey; without one the results are empty
/// - Submissions are never de-duplicated
#[async_trait]
pub trait SurveyProvider: Send + Sync {
    async fn list_surveys(&self) -> Result<Vec<Survey>, SurveyProviderError>;

    async fn submit_response(&self, response: &SurveyResponse) -> Result<(), SurveyProviderError>;

    async fn fetch_results(
        &self,
        survey_id: &SurveyId,
        response: Option<&SurveyResponse>,
    ) -> Result<SurveyResults, SurveyProviderError>;

    /// Responses submitted by the partner of `user_id`.
    async fn partner_responses(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SurveyResponse>, SurveyProviderError>;
}
