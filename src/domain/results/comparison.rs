//! Expectation-versus-reality comparisons.

use serde::{Deserialize, Serialize};

use super::gap::GapLevel;
use crate::domain::foundation::{QuestionId, Score, SurveyId};

/// Partner's scores for the same category or question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerScores {
    pub expectation_score: Score,
    pub reality_score: Score,
    pub gap: f64,
}

impl PartnerScores {
    pub fn new(expectation: Score, reality: Score) -> Self {
        Self {
            expectation_score: expectation,
            reality_score: reality,
            gap: expectation.value() - reality.value(),
        }
    }
}

/// Per-category aggregate of one user's answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultComparison {
    pub category_id: String,
    pub category_name: String,
    pub expectation_score: Score,
    pub reality_score: Score,
    pub gap: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<PartnerScores>,
}

impl ResultComparison {
    pub fn new(
        category_id: impl Into<String>,
        category_name: impl Into<String>,
        expectation: Score,
        reality: Score,
    ) -> Self {
        Self {
            category_id: category_id.into(),
            category_name: category_name.into(),
            expectation_score: expectation,
            reality_score: reality,
            gap: expectation.value() - reality.value(),
            partner: None,
        }
    }

    pub fn with_partner(mut self, partner: PartnerScores) -> Self {
        self.partner = Some(partner);
        self
    }

    pub fn gap_level(&self) -> GapLevel {
        GapLevel::from_gap(self.gap)
    }
}

/// Question-level detail for the drill-down view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionComparison {
    pub question_id: QuestionId,
    pub item: String,
    pub text: String,
    pub expectation: Score,
    pub reality: Score,
    pub gap: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<PartnerScores>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryDetail {
    pub id: String,
    pub name: String,
    pub questions: Vec<QuestionComparison>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetail {
    pub category_id: String,
    pub name: String,
    pub subcategories: Vec<SubcategoryDetail>,
}

/// Everything fetched for one survey's results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResults {
    pub survey_id: SurveyId,
    pub comparisons: Vec<ResultComparison>,
    #[serde(default)]
    pub details: Vec<CategoryDetail>,
}

impl SurveyResults {
    pub fn empty(survey_id: SurveyId) -> Self {
        Self {
            survey_id,
            comparisons: Vec::new(),
            details: Vec::new(),
        }
    }

    pub fn has_partner_results(&self) -> bool {
        self.comparisons.iter().any(|c| c.partner.is_some())
    }

    pub fn detail(&self, category_id: &str) -> Option<&CategoryDetail> {
        self.details.iter().find(|d| d.category_id == category_id)
    }
}
