//! Read model behind the results page.

use serde::Serialize;

use super::analysis::rank_by_gap;
use super::comparison::{CategoryDetail, ResultComparison, SurveyResults};
use crate::domain::foundation::SurveyId;
use crate::domain::survey::{Survey, SurveyKind, SurveyResponse};

/// A survey the user has submitted at least once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedSurvey {
    pub id: SurveyId,
    pub kind: SurveyKind,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    pub survey_id: SurveyId,
    pub survey_type: SurveyKind,
    pub heading: String,
    pub comparisons: Vec<ResultComparison>,
    pub priorities: Vec<ResultComparison>,
    pub details: Vec<CategoryDetail>,
    pub has_partner_results: bool,
    pub completed_surveys: Vec<CompletedSurvey>,
    /// Surveys offered by the family/couple switch. Empty unless both
    /// kinds were completed.
    pub switch_targets: Vec<CompletedSurvey>,
}

impl ResultsView {
    /// Builds the view for `survey_id`.
    ///
    /// Results fetched for a different survey are ignored. An id missing
    /// from the catalog falls back to the family survey type.
    pub fn build(
        survey_id: &SurveyId,
        catalog: &[Survey],
        user_responses: &[SurveyResponse],
        results: Option<&SurveyResults>,
    ) -> Self {
        let survey = catalog.iter().find(|s| &s.id == survey_id);
        let survey_type = survey.map(|s| s.kind).unwrap_or(SurveyKind::Family);
        let title = catalog
            .iter()
            .find(|s| s.kind == survey_type)
            .map(|s| s.title.as_str())
            .unwrap_or_default();

        let results = results.filter(|r| &r.survey_id == survey_id);
        let comparisons = results.map(|r| r.comparisons.clone()).unwrap_or_default();
        let details = results.map(|r| r.details.clone()).unwrap_or_default();

        let completed_surveys = completed_surveys(catalog, user_responses);
        let has_family = completed_surveys.iter().any(|s| s.kind == SurveyKind::Family);
        let has_couple = completed_surveys.iter().any(|s| s.kind == SurveyKind::Couple);
        let switch_targets = if has_family && has_couple {
            [SurveyKind::Family, SurveyKind::Couple]
                .iter()
                .filter_map(|kind| completed_surveys.iter().find(|s| s.kind == *kind).cloned())
                .collect()
        } else {
            Vec::new()
        };

        Self {
            survey_id: survey_id.clone(),
            survey_type,
            heading: format!("{}の結果", title),
            priorities: rank_by_gap(&comparisons),
            has_partner_results: comparisons.iter().any(|c| c.partner.is_some()),
            comparisons,
            details,
            completed_surveys,
            switch_targets,
        }
    }

    pub fn can_switch_type(&self) -> bool {
        !self.switch_targets.is_empty()
    }
}

/// Catalog surveys referenced by at least one response, in catalog order.
pub fn completed_surveys(catalog: &[Survey], responses: &[SurveyResponse]) -> Vec<CompletedSurvey> {
    catalog
        .iter()
        .filter(|s| responses.iter().any(|r| r.survey_id == s.id))
        .map(|s| CompletedSurvey {
            id: s.id.clone(),
            kind: s.kind,
            title: s.title.clone(),
        })
        .collect()
}
