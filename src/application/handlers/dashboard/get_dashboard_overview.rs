//! GetDashboardOverviewHandler - Query handler for the dashboard page.
//!
//! Reads the signed-in user, survey catalog, submitted responses and the
//! focus list. The catalog and partner responses are fetched on demand.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::stores::{AuthStore, SurveyStore};
use crate::domain::dashboard::{DashboardOverview, FocusedActions};

/// Query to get the dashboard overview.
#[derive(Debug, Clone, Default)]
pub struct GetDashboardOverviewQuery {
    /// Refresh partner responses before building the overview.
    pub sync_partner: bool,
}

/// Result of successful dashboard overview query.
pub type GetDashboardOverviewResult = DashboardOverview;

/// Handler for retrieving the dashboard overview.
pub struct GetDashboardOverviewHandler {
    auth: Arc<AuthStore>,
    surveys: Arc<SurveyStore>,
    focused: Arc<RwLock<FocusedActions>>,
}

impl GetDashboardOverviewHandler {
    pub fn new(
        auth: Arc<AuthStore>,
        surveys: Arc<SurveyStore>,
        focused: Arc<RwLock<FocusedActions>>,
    ) -> Self {
        Self {
            auth,
            surveys,
            focused,
        }
    }

    pub async fn handle(&self, query: GetDashboardOverviewQuery) -> GetDashboardOverviewResult {
        let user = self.auth.current_user();

        if self.surveys.snapshot().surveys.is_empty() {
            self.surveys.fetch_surveys().await;
        }
        if let (true, Some(user)) = (query.sync_partner, user.as_ref()) {
            self.surveys.sync_partner_responses(&user.id).await;
        }

        let state = self.surveys.snapshot();
        let focused = self.focused.read().await;
        DashboardOverview::build(
            user.as_ref(),
            &state.surveys,
            &state.user_responses,
            &state.partner_responses,
            focused.as_slice(),
        )
    }
}
