//! Survey store.
//!
//! Holds the catalog, the survey being answered, scratch answers, submitted
//! responses and the latest results. `user_responses`, `answers` and
//! `current_page` are persisted under the `survey-storage` partition.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};

use super::persisted;
use crate::domain::foundation::{PageNumber, Score, SurveyId, UserId};
use crate::domain::results::{latest_for, SurveyResults};
use crate::domain::survey::{Answers, Survey, SurveyResponse};
use crate::ports::{StateStorage, SurveyProvider, SurveyProviderError, SURVEY_PARTITION};

/// Failures surfaced through state rather than returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SurveyStoreError {
    #[error("Survey not found: {survey_id}")]
    #[serde(rename_all = "camelCase")]
    SurveyNotFound { survey_id: SurveyId },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyState {
    pub surveys: Vec<Survey>,
    pub current_survey: Option<Survey>,
    pub current_page: PageNumber,
    pub user_responses: Vec<SurveyResponse>,
    pub partner_responses: Vec<SurveyResponse>,
    pub is_loading: bool,
    /// Latest results; carries the id of the survey they belong to.
    pub results: Option<SurveyResults>,
    pub answers: Answers,
    pub last_error: Option<SurveyStoreError>,
}

impl SurveyState {
    pub fn results_survey_id(&self) -> Option<&SurveyId> {
        self.results.as_ref().map(|r| &r.survey_id)
    }

    /// Results if they were fetched for `survey_id`.
    pub fn results_for(&self, survey_id: &SurveyId) -> Option<&SurveyResults> {
        self.results.as_ref().filter(|r| &r.survey_id == survey_id)
    }
}

/// The persisted subset of [`SurveyState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSurvey {
    #[serde(default)]
    user_responses: Vec<SurveyResponse>,
    #[serde(default)]
    answers: Answers,
    #[serde(default)]
    current_page: PageNumber,
}

impl From<&SurveyState> for PersistedSurvey {
    fn from(state: &SurveyState) -> Self {
        Self {
            user_responses: state.user_responses.clone(),
            answers: state.answers.clone(),
            current_page: state.current_page,
        }
    }
}

pub struct SurveyStore {
    state: watch::Sender<SurveyState>,
    provider: Arc<dyn SurveyProvider>,
    storage: Arc<dyn StateStorage>,
    /// Serialises snapshot + save so an older snapshot never lands last.
    persist_lock: Mutex<()>,
}

impl SurveyStore {
    /// Creates the store, restoring persisted state from `storage`.
    pub async fn restore(provider: Arc<dyn SurveyProvider>, storage: Arc<dyn StateStorage>) -> Self {
        let persisted: PersistedSurvey =
            persisted::load_or_default(storage.as_ref(), SURVEY_PARTITION).await;
        let (state, _) = watch::channel(SurveyState {
            user_responses: persisted.user_responses,
            answers: persisted.answers,
            current_page: persisted.current_page,
            ..Default::default()
        });

        Self {
            state,
            provider,
            storage,
            persist_lock: Mutex::new(()),
        }
    }

    pub fn snapshot(&self) -> SurveyState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<SurveyState> {
        self.state.subscribe()
    }

    pub async fn fetch_surveys(&self) {
        self.state.send_modify(|s| s.is_loading = true);

        match self.provider.list_surveys().await {
            Ok(surveys) => self.state.send_modify(|s| {
                s.surveys = surveys;
                s.is_loading = false;
            }),
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch surveys");
                self.state.send_modify(|s| s.is_loading = false);
            }
        }
    }

    /// Re-fetches the catalog and selects `survey_id` as the current survey.
    ///
    /// An unknown id clears the current survey and records a not-found error.
    pub async fn fetch_survey_by_id(&self, survey_id: &SurveyId) {
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.last_error = None;
        });

        match self.provider.list_surveys().await {
            Ok(surveys) => self.state.send_modify(|s| {
                s.current_survey = surveys.iter().find(|x| &x.id == survey_id).cloned();
                if s.current_survey.is_none() {
                    tracing::debug!(%survey_id, "requested survey not in catalog");
                    s.last_error = Some(SurveyStoreError::SurveyNotFound {
                        survey_id: survey_id.clone(),
                    });
                }
                s.surveys = surveys;
                s.is_loading = false;
            }),
            Err(e) => {
                tracing::error!(error = %e, %survey_id, "failed to fetch survey");
                self.state.send_modify(|s| s.is_loading = false);
            }
        }
    }

    /// Hands `response` to the provider and appends it once accepted.
    ///
    /// Returns whether the response was accepted. Repeated submissions are
    /// all kept.
    pub async fn submit_response(&self, response: SurveyResponse) -> bool {
        self.state.send_modify(|s| s.is_loading = true);

        let accepted = match self.provider.submit_response(&response).await {
            Ok(()) => {
                tracing::info!(survey_id = %response.survey_id, "survey response submitted");
                self.state.send_modify(|s| {
                    s.user_responses.push(response);
                    s.is_loading = false;
                });
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to submit response");
                self.state.send_modify(|s| s.is_loading = false);
                false
            }
        };

        self.persist().await;
        accepted
    }

    /// Builds a response from the scratch answers and submits it.
    ///
    /// Nothing is submitted when no question has both scores.
    pub async fn submit_answers(&self, survey_id: &SurveyId, user_id: UserId) -> bool {
        let response = {
            let state = self.state.borrow();
            state
                .surveys
                .iter()
                .chain(state.current_survey.iter())
                .find(|s| &s.id == survey_id)
                .map(|survey| SurveyResponse::from_answers(survey, user_id, &state.answers))
        };

        match response {
            Some(response) if response.is_empty() => {
                tracing::debug!(%survey_id, "no complete answers to submit");
                false
            }
            Some(response) => self.submit_response(response).await,
            None => {
                tracing::debug!(%survey_id, "cannot submit answers for unknown survey");
                self.state.send_modify(|s| {
                    s.last_error = Some(SurveyStoreError::SurveyNotFound {
                        survey_id: survey_id.clone(),
                    });
                });
                false
            }
        }
    }

    /// Replaces results with those for `survey_id`.
    ///
    /// An unknown survey clears results and records a not-found error.
    pub async fn fetch_results(&self, survey_id: &SurveyId) {
        let latest = {
            let state = self.state.borrow();
            latest_for(&state.user_responses, survey_id).cloned()
        };
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.last_error = None;
        });

        match self.provider.fetch_results(survey_id, latest.as_ref()).await {
            Ok(results) => self.state.send_modify(|s| {
                s.results = Some(results);
                s.is_loading = false;
            }),
            Err(SurveyProviderError::SurveyNotFound(missing)) => {
                tracing::debug!(survey_id = %missing, "results requested for unknown survey");
                self.state.send_modify(|s| {
                    s.results = None;
                    s.last_error = Some(SurveyStoreError::SurveyNotFound { survey_id: missing });
                    s.is_loading = false;
                });
            }
            Err(e) => {
                tracing::error!(error = %e, %survey_id, "failed to fetch results");
                self.state.send_modify(|s| s.is_loading = false);
            }
        }
    }

    /// Refreshes the partner's responses.
    pub async fn sync_partner_responses(&self, user_id: &UserId) {
        match self.provider.partner_responses(user_id).await {
            Ok(responses) => self.state.send_modify(|s| s.partner_responses = responses),
            Err(e) => tracing::error!(error = %e, "failed to fetch partner responses"),
        }
    }

    /// Moves the page cursor, clamped to the survey's page range.
    pub async fn set_current_page(&self, page: i64) -> PageNumber {
        let page = PageNumber::clamped(page);
        self.state.send_modify(|s| s.current_page = page);
        self.persist().await;
        page
    }

    /// Records one answer, clamped to the 0-5 scale.
    pub async fn set_answer(&self, key: &str, value: f64) -> Score {
        let mut stored = Score::default();
        self.state.send_modify(|s| stored = s.answers.set(key, value));
        self.persist().await;
        stored
    }

    /// Clears scratch answers and returns to the first page.
    pub async fn reset_answers(&self) {
        self.state.send_modify(|s| {
            s.answers.clear();
            s.current_page = PageNumber::FIRST;
        });
        self.persist().await;
    }

    async fn persist(&self) {
        let _guard = self.persist_lock.lock().await;
        let snapshot = PersistedSurvey::from(&*self.state.borrow());
        if let Err(e) = persisted::save(self.storage.as_ref(), SURVEY_PARTITION, &snapshot).await {
            tracing::error!(error = %e, "failed to persist survey state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStateStorage;
    use crate::adapters::survey::MockSurveyProvider;
    use crate::domain::foundation::QuestionId;
    use crate::domain::survey::{answer_key, Dimension, QuestionAnswer, SurveyCatalog};

    fn provider() -> MockSurveyProvider {
        MockSurveyProvider::new(Arc::new(SurveyCatalog::bundled().unwrap()))
    }

    async fn store_with(provider: MockSurveyProvider, storage: InMemoryStateStorage) -> SurveyStore {
        SurveyStore::restore(Arc::new(provider), Arc::new(storage)).await
    }

    async fn store() -> SurveyStore {
        store_with(provider(), InMemoryStateStorage::new()).await
    }

    fn id(s: &str) -> SurveyId {
        SurveyId::new(s).unwrap()
    }

    fn user() -> UserId {
        UserId::new("1").unwrap()
    }

    fn response(survey_id: &str) -> SurveyResponse {
        SurveyResponse::new(
            id(survey_id),
            user(),
            vec![QuestionAnswer::new(QuestionId::new("q1").unwrap(), 4.0, 2.0)],
        )
    }

    #[tokio::test]
    async fn fetch_surveys_populates_catalog() {
        let store = store().await;

        store.fetch_surveys().await;

        let state = store.snapshot();
        assert_eq!(state.surveys.len(), 2);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn fetch_survey_by_id_selects_survey() {
        let store = store().await;

        store.fetch_survey_by_id(&id("2")).await;

        let state = store.snapshot();
        assert_eq!(state.current_survey.unwrap().title, "カップル関係診断");
        assert!(state.last_error.is_none());
    }

    #[tokio::test]
    async fn unknown_survey_clears_current_and_records_error() {
        let store = store().await;
        store.fetch_survey_by_id(&id("1")).await;

        store.fetch_survey_by_id(&id("9")).await;

        let state = store.snapshot();
        assert!(state.current_survey.is_none());
        assert_eq!(
            state.last_error,
            Some(SurveyStoreError::SurveyNotFound { survey_id: id("9") })
        );
    }

    #[tokio::test]
    async fn duplicate_submissions_are_both_kept() {
        let store = store().await;

        assert!(store.submit_response(response("1")).await);
        assert!(store.submit_response(response("1")).await);

        assert_eq!(store.snapshot().user_responses.len(), 2);
    }

    #[tokio::test]
    async fn rejected_submission_is_not_appended() {
        let store = store().await;

        assert!(!store.submit_response(response("9")).await);

        let state = store.snapshot();
        assert!(state.user_responses.is_empty());
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn submit_answers_builds_response_from_scratch_answers() {
        let store = store().await;
        store.fetch_surveys().await;
        let q1 = QuestionId::new("q1").unwrap();
        store.set_answer(&answer_key(&q1, Dimension::Expectation), 5.0).await;
        store.set_answer(&answer_key(&q1, Dimension::Reality), 3.0).await;

        assert!(store.submit_answers(&id("1"), user()).await);

        let state = store.snapshot();
        let submitted = &state.user_responses[0];
        assert_eq!(submitted.answers.len(), 1);
        assert_eq!(submitted.answers[0].expectation.value(), 5.0);
    }

    #[tokio::test]
    async fn submit_answers_without_complete_answers_submits_nothing() {
        let store = store().await;
        store.fetch_surveys().await;
        let q1 = QuestionId::new("q1").unwrap();
        store.set_answer(&answer_key(&q1, Dimension::Expectation), 5.0).await;

        assert!(!store.submit_answers(&id("1"), user()).await);
        assert!(store.snapshot().user_responses.is_empty());
    }

    #[tokio::test]
    async fn submit_answers_for_unknown_survey_records_error() {
        let store = store().await;
        assert!(!store.submit_answers(&id("9"), user()).await);
        assert!(store.snapshot().last_error.is_some());
    }

    #[tokio::test]
    async fn results_are_scoped_to_survey() {
        let store = store().await;
        store.submit_response(response("1")).await;

        store.fetch_results(&id("1")).await;

        let state = store.snapshot();
        assert_eq!(state.results_survey_id(), Some(&id("1")));
        assert_eq!(state.results_for(&id("1")).unwrap().comparisons.len(), 1);
        assert!(state.results_for(&id("2")).is_none());
    }

    #[tokio::test]
    async fn results_for_unknown_survey_clear_previous_results() {
        let store = store().await;
        store.submit_response(response("1")).await;
        store.fetch_results(&id("1")).await;

        store.fetch_results(&id("9")).await;

        let state = store.snapshot();
        assert!(state.results.is_none());
        assert_eq!(
            state.last_error,
            Some(SurveyStoreError::SurveyNotFound { survey_id: id("9") })
        );
    }

    #[tokio::test]
    async fn set_answer_and_page_are_clamped() {
        let store = store().await;

        assert_eq!(store.set_answer("q1", 9.0).await.value(), 5.0);
        assert_eq!(store.set_answer("q2", -1.0).await.value(), 0.0);
        assert_eq!(store.set_current_page(0).await, PageNumber::FIRST);
        assert_eq!(store.set_current_page(12).await, PageNumber::LAST);
    }

    #[tokio::test]
    async fn reset_answers_returns_to_first_page() {
        let store = store().await;
        store.set_answer("q1", 3.0).await;
        store.set_current_page(3).await;

        store.reset_answers().await;

        let state = store.snapshot();
        assert!(state.answers.is_empty());
        assert_eq!(state.current_page, PageNumber::FIRST);
    }

    #[tokio::test]
    async fn partner_responses_are_synced() {
        let partner = SurveyResponse::new(id("1"), UserId::new("2").unwrap(), vec![]);
        let store = store_with(
            provider().with_partner_response(partner),
            InMemoryStateStorage::new(),
        )
        .await;

        store.sync_partner_responses(&user()).await;

        assert_eq!(store.snapshot().partner_responses.len(), 1);
    }

    #[tokio::test]
    async fn reload_keeps_only_persisted_fields() {
        let storage = InMemoryStateStorage::new();
        let store = store_with(provider(), storage.clone()).await;
        store.fetch_surveys().await;
        store.set_answer("q1", 4.0).await;
        store.set_current_page(2).await;
        store.submit_response(response("1")).await;

        let reloaded = store_with(provider(), storage).await;

        let state = reloaded.snapshot();
        assert_eq!(state.answers.get("q1").unwrap().value(), 4.0);
        assert_eq!(state.current_page.value(), 2);
        assert_eq!(state.user_responses.len(), 1);
        assert!(state.surveys.is_empty());
        assert!(state.results.is_none());
        assert!(!state.is_loading);
    }
}
