//! GetImprovementAreasHandler - Query handler for the relationship tips page.
//!
//! Ranks the items of the user's latest response by gap and attaches the
//! improvement actions available for each.

use std::sync::Arc;

use serde::Serialize;

use crate::application::stores::SurveyStore;
use crate::domain::foundation::SurveyId;
use crate::domain::results::latest_for;
use crate::domain::survey::SurveyCatalog;
use crate::domain::tips::{improvement_areas, top_item, AreaCategory, AreaItem, TipsCatalog};

/// Query for improvement areas.
#[derive(Debug, Clone, Default)]
pub struct GetImprovementAreasQuery {
    /// Survey to analyse; the most recently submitted one when absent.
    pub survey_id: Option<SurveyId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementAreasView {
    /// Survey the areas were computed from, if any response exists.
    pub survey_id: Option<SurveyId>,
    pub categories: Vec<AreaCategory>,
    /// The single item with the largest gap.
    pub top_item: Option<AreaItem>,
}

pub type GetImprovementAreasResult = ImprovementAreasView;

pub struct GetImprovementAreasHandler {
    surveys: Arc<SurveyStore>,
    catalog: Arc<SurveyCatalog>,
    tips: Arc<TipsCatalog>,
}

impl GetImprovementAreasHandler {
    pub fn new(surveys: Arc<SurveyStore>, catalog: Arc<SurveyCatalog>, tips: Arc<TipsCatalog>) -> Self {
        Self {
            surveys,
            catalog,
            tips,
        }
    }

    pub fn handle(&self, query: GetImprovementAreasQuery) -> GetImprovementAreasResult {
        let state = self.surveys.snapshot();
        let response = match &query.survey_id {
            Some(id) => latest_for(&state.user_responses, id),
            None => state.user_responses.last(),
        };

        let Some((response, survey)) =
            response.and_then(|r| self.catalog.get(&r.survey_id).map(|s| (r, s)))
        else {
            return ImprovementAreasView {
                survey_id: query.survey_id,
                categories: Vec::new(),
                top_item: None,
            };
        };

        let categories = improvement_areas(survey, response, &self.tips);
        let top_item = top_item(&categories).cloned();
        ImprovementAreasView {
            survey_id: Some(survey.id.clone()),
            categories,
            top_item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStateStorage;
    use crate::adapters::survey::MockSurveyProvider;
    use crate::domain::foundation::{QuestionId, UserId};
    use crate::domain::results::GapLevel;
    use crate::domain::survey::{QuestionAnswer, SurveyResponse};

    async fn handler() -> (GetImprovementAreasHandler, Arc<SurveyStore>) {
        let catalog = Arc::new(SurveyCatalog::bundled().unwrap());
        let provider = MockSurveyProvider::new(catalog.clone());
        let surveys = Arc::new(
            SurveyStore::restore(Arc::new(provider), Arc::new(InMemoryStateStorage::new())).await,
        );
        let handler = GetImprovementAreasHandler::new(
            surveys.clone(),
            catalog,
            Arc::new(TipsCatalog::bundled().unwrap()),
        );
        (handler, surveys)
    }

    fn answer(q: &str, expectation: f64, reality: f64) -> QuestionAnswer {
        QuestionAnswer::new(QuestionId::new(q).unwrap(), expectation, reality)
    }

    #[tokio::test]
    async fn no_responses_gives_no_areas() {
        let (handler, _) = handler().await;
        let view = handler.handle(GetImprovementAreasQuery::default());
        assert!(view.categories.is_empty());
        assert!(view.top_item.is_none());
    }

    #[tokio::test]
    async fn top_item_is_largest_gap_with_actions() {
        let (handler, surveys) = handler().await;
        surveys
            .submit_response(SurveyResponse::new(
                SurveyId::new("1").unwrap(),
                UserId::new("1").unwrap(),
                vec![answer("q1", 5.0, 2.5), answer("q2", 4.0, 3.5)],
            ))
            .await;

        let view = handler.handle(GetImprovementAreasQuery::default());

        assert_eq!(view.survey_id, Some(SurveyId::new("1").unwrap()));
        let top = view.top_item.unwrap();
        assert_eq!(top.name, "共感理解");
        assert_eq!(top.level, GapLevel::Critical);
        assert_eq!(top.actions.len(), 3);
        assert_eq!(top.actions[0].name, "感情1分シェア");
    }

    #[tokio::test]
    async fn explicit_survey_without_response_is_empty() {
        let (handler, surveys) = handler().await;
        surveys
            .submit_response(SurveyResponse::new(
                SurveyId::new("1").unwrap(),
                UserId::new("1").unwrap(),
                vec![answer("q1", 5.0, 2.0)],
            ))
            .await;

        let view = handler.handle(GetImprovementAreasQuery {
            survey_id: Some(SurveyId::new("2").unwrap()),
        });

        assert!(view.categories.is_empty());
    }
}
