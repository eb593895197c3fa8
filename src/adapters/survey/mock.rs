//! Mock survey provider backed by the bundled catalog.
//!
//! Keeps submitted responses in memory and computes results locally.
//! With demo partner mode on, results without a real partner response get
//! partner scores derived from the user's own.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::sleep;

use crate::domain::foundation::{SurveyId, UserId};
use crate::domain::results::{compare, latest_for, with_demo_partner, SurveyResults};
use crate::domain::survey::{Survey, SurveyCatalog, SurveyResponse};
use crate::ports::{SurveyProvider, SurveyProviderError};

#[derive(Debug)]
pub struct MockSurveyProvider {
    catalog: Arc<SurveyCatalog>,
    /// Simulated round-trip time
    latency: Duration,
    demo_partner: bool,
    submitted: RwLock<Vec<SurveyResponse>>,
    partner: RwLock<Vec<SurveyResponse>>,
    /// Optional error to return for all calls (for error testing)
    force_error: RwLock<Option<SurveyProviderError>>,
}

impl MockSurveyProvider {
    pub fn new(catalog: Arc<SurveyCatalog>) -> Self {
        Self {
            catalog,
            latency: Duration::ZERO,
            demo_partner: false,
            submitted: RwLock::new(Vec::new()),
            partner: RwLock::new(Vec::new()),
            force_error: RwLock::new(None),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_demo_partner(mut self, enabled: bool) -> Self {
        self.demo_partner = enabled;
        self
    }

    /// Registers a response as coming from the user's partner.
    pub fn with_partner_response(mut self, response: SurveyResponse) -> Self {
        self.partner.get_mut().push(response);
        self
    }

    /// Forces all calls to return the specified error.
    pub fn with_error(mut self, error: SurveyProviderError) -> Self {
        *self.force_error.get_mut() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub async fn clear_error(&self) {
        *self.force_error.write().await = None;
    }

    /// Number of responses accepted so far.
    pub async fn submitted_count(&self) -> usize {
        self.submitted.read().await.len()
    }

    async fn simulate_call(&self) -> Result<(), SurveyProviderError> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        match self.force_error.read().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn survey(&self, survey_id: &SurveyId) -> Result<&Survey, SurveyProviderError> {
        self.catalog
            .get(survey_id)
            .ok_or_else(|| SurveyProviderError::SurveyNotFound(survey_id.clone()))
    }
}

#[async_trait]
impl SurveyProvider for MockSurveyProvider {
    async fn list_surveys(&self) -> Result<Vec<Survey>, SurveyProviderError> {
        self.simulate_call().await?;
        Ok(self.catalog.surveys().to_vec())
    }

    async fn submit_response(&self, response: &SurveyResponse) -> Result<(), SurveyProviderError> {
        self.simulate_call().await?;

        let survey = self.survey(&response.survey_id)?;
        if let Some(unknown) = response
            .answers
            .iter()
            .find(|a| survey.locate(&a.question_id).is_none())
        {
            return Err(SurveyProviderError::InvalidResponse(format!(
                "question {} is not part of survey {}",
                unknown.question_id, survey.id
            )));
        }

        self.submitted.write().await.push(response.clone());
        Ok(())
    }

    async fn fetch_results(
        &self,
        survey_id: &SurveyId,
        response: Option<&SurveyResponse>,
    ) -> Result<SurveyResults, SurveyProviderError> {
        self.simulate_call().await?;

        let survey = self.survey(survey_id)?;
        let Some(response) = response.filter(|r| &r.survey_id == survey_id) else {
            return Ok(SurveyResults::empty(survey_id.clone()));
        };

        let partner = self.partner.read().await;
        let results = compare(survey, response, latest_for(&partner, survey_id));

        Ok(if self.demo_partner {
            with_demo_partner(results)
        } else {
            results
        })
    }

    async fn partner_responses(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SurveyResponse>, SurveyProviderError> {
        self.simulate_call().await?;
        Ok(self
            .partner
            .read()
            .await
            .iter()
            .filter(|r| &r.user_id != user_id)
            .cloned()
            .collect())
    }
}
