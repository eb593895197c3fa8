//! Process-wide application services.
//!
//! Built once at startup and shared with the HTTP layer. Stores are
//! restored from state storage on construction.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::handlers::{
    CreateInvitationHandler, FocusActionHandler, GetDashboardOverviewHandler,
    GetImprovementAreasHandler, GetResultsViewHandler, GetTipHandler, RequestPasswordResetHandler,
    UpdateFocusProgressHandler,
};
use super::stores::{AuthStore, SurveyStore};
use crate::domain::dashboard::FocusedActions;
use crate::domain::survey::SurveyCatalog;
use crate::domain::tips::TipsCatalog;
use crate::ports::{AuthBackend, PasswordResetMailer, StateStorage, SurveyProvider};

/// Everything [`AppServices`] is assembled from.
pub struct ServiceDependencies {
    pub auth_backend: Arc<dyn AuthBackend>,
    pub survey_provider: Arc<dyn SurveyProvider>,
    pub storage: Arc<dyn StateStorage>,
    pub mailer: Arc<dyn PasswordResetMailer>,
    pub catalog: Arc<SurveyCatalog>,
    pub tips: Arc<TipsCatalog>,
    /// Origin for invite and reset links, without a trailing slash
    pub public_origin: String,
}

#[derive(Clone)]
pub struct AppServices {
    pub auth: Arc<AuthStore>,
    pub surveys: Arc<SurveyStore>,
    pub catalog: Arc<SurveyCatalog>,
    pub tips: Arc<TipsCatalog>,
    /// Never persisted
    pub focused: Arc<RwLock<FocusedActions>>,
    mailer: Arc<dyn PasswordResetMailer>,
    public_origin: String,
}

impl AppServices {
    pub async fn new(deps: ServiceDependencies) -> Self {
        let auth = AuthStore::restore(deps.auth_backend, deps.storage.clone()).await;
        let surveys = SurveyStore::restore(deps.survey_provider, deps.storage).await;

        tracing::debug!(
            authenticated = auth.is_authenticated(),
            responses = surveys.snapshot().user_responses.len(),
            "stores restored"
        );

        Self {
            auth: Arc::new(auth),
            surveys: Arc::new(surveys),
            catalog: deps.catalog,
            tips: deps.tips,
            focused: Arc::new(RwLock::new(FocusedActions::default())),
            mailer: deps.mailer,
            public_origin: deps.public_origin,
        }
    }

    pub fn public_origin(&self) -> &str {
        &self.public_origin
    }

    pub fn password_reset_handler(&self) -> RequestPasswordResetHandler {
        RequestPasswordResetHandler::new(self.mailer.clone(), self.public_origin.as_str())
    }

    pub fn invitation_handler(&self) -> CreateInvitationHandler {
        CreateInvitationHandler::new(self.public_origin.as_str())
    }

    pub fn dashboard_handler(&self) -> GetDashboardOverviewHandler {
        GetDashboardOverviewHandler::new(self.auth.clone(), self.surveys.clone(), self.focused.clone())
    }

    pub fn focus_action_handler(&self) -> FocusActionHandler {
        FocusActionHandler::new(self.focused.clone())
    }

    pub fn focus_progress_handler(&self) -> UpdateFocusProgressHandler {
        UpdateFocusProgressHandler::new(self.focused.clone())
    }

    pub fn results_handler(&self) -> GetResultsViewHandler {
        GetResultsViewHandler::new(self.surveys.clone())
    }

    pub fn improvement_areas_handler(&self) -> GetImprovementAreasHandler {
        GetImprovementAreasHandler::new(self.surveys.clone(), self.catalog.clone(), self.tips.clone())
    }

    pub fn tip_handler(&self) -> GetTipHandler {
        GetTipHandler::new(self.tips.clone())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory services for handler and router tests.

    use super::*;
    use crate::adapters::auth::MockAuthBackend;
    use crate::adapters::email::RecordingMailer;
    use crate::adapters::storage::InMemoryStateStorage;
    use crate::adapters::survey::MockSurveyProvider;

    pub(crate) async fn in_memory_services() -> AppServices {
        let catalog = Arc::new(SurveyCatalog::bundled().unwrap());
        AppServices::new(ServiceDependencies {
            auth_backend: Arc::new(MockAuthBackend::new()),
            survey_provider: Arc::new(MockSurveyProvider::new(catalog.clone())),
            storage: Arc::new(InMemoryStateStorage::new()),
            mailer: Arc::new(RecordingMailer::new()),
            catalog,
            tips: Arc::new(TipsCatalog::bundled().unwrap()),
            public_origin: "http://localhost:8080".to_string(),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::testing::in_memory_services;

    #[tokio::test]
    async fn fresh_services_start_signed_out_with_default_focus() {
        let services = in_memory_services().await;
        assert!(!services.auth.is_authenticated());
        assert_eq!(services.focused.read().await.len(), 1);
        assert_eq!(services.public_origin(), "http://localhost:8080");
    }
}
