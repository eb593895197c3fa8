use serde::Serialize;

use super::focused_action::FocusedAction;
use crate::domain::foundation::{Percentage, SurveyId};
use crate::domain::survey::{Survey, SurveyKind, SurveyResponse};
use crate::domain::user::{RequiredField, User};

/// Everything the dashboard page shows, computed from store state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    /// Shown in the welcome line
    pub user_name: String,

    /// Profile completion and its remainder (for the doughnut)
    pub profile_completion: Percentage,
    pub profile_remaining: Percentage,
    pub missing_profile_fields: Vec<RequiredField>,

    /// Surveys the user can start
    pub available_surveys: Vec<SurveySummary>,

    /// Submitted responses
    pub response_count: usize,
    /// Survey of the most recent response, linked from the results card
    pub latest_survey_id: Option<SurveyId>,

    pub partner_status: PartnerStatus,

    pub focused_actions: Vec<FocusedAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySummary {
    pub id: SurveyId,
    pub title: String,
    pub kind: SurveyKind,
    /// Whether the user submitted this survey at least once
    pub completed: bool,
}

/// Partner link state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    Linked,
    Unlinked,
}

impl DashboardOverview {
    pub fn build(
        user: Option<&User>,
        surveys: &[Survey],
        user_responses: &[SurveyResponse],
        partner_responses: &[SurveyResponse],
        focused_actions: &[FocusedAction],
    ) -> Self {
        let profile_completion = user
            .map(|u| u.profile_completion())
            .unwrap_or(Percentage::ZERO);
        let missing_profile_fields = user
            .map(|u| u.profile.missing_fields())
            .unwrap_or_else(|| RequiredField::ALL.to_vec());

        let available_surveys = surveys
            .iter()
            .map(|s| SurveySummary {
                id: s.id.clone(),
                title: s.title.clone(),
                kind: s.kind,
                completed: user_responses.iter().any(|r| r.survey_id == s.id),
            })
            .collect();

        let partner_status = if partner_responses.is_empty() {
            PartnerStatus::Unlinked
        } else {
            PartnerStatus::Linked
        };

        Self {
            user_name: user.map(|u| u.name.clone()).unwrap_or_default(),
            profile_completion,
            profile_remaining: profile_completion.remainder(),
            missing_profile_fields,
            available_surveys,
            response_count: user_responses.len(),
            latest_survey_id: user_responses.last().map(|r| r.survey_id.clone()),
            partner_status,
            focused_actions: focused_actions.to_vec(),
        }
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
