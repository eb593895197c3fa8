//! Application routes and the authentication gate in front of them.

use serde::Serialize;

use crate::domain::foundation::SurveyId;

/// Every page the application can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    ForgotPassword,
    References,
    Terms,
    Privacy,
    Contact,
    Faq,
    Dashboard,
    Profile,
    InvitePartner,
    Survey(SurveyId),
    Results(SurveyId),
    ConsultExpert,
    RelationshipTips,
}

impl Route {
    /// Matches a path against the route table.
    ///
    /// A single trailing slash is ignored. Query strings are not part of
    /// the path.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        let route = match segments.as_slice() {
            [""] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["forgot-password"] => Route::ForgotPassword,
            ["references"] => Route::References,
            ["terms"] => Route::Terms,
            ["privacy"] => Route::Privacy,
            ["contact"] => Route::Contact,
            ["faq"] => Route::Faq,
            ["dashboard"] => Route::Dashboard,
            ["profile"] => Route::Profile,
            ["invite-partner"] => Route::InvitePartner,
            ["survey", id] => Route::Survey(SurveyId::new(*id).ok()?),
            ["results", id] => Route::Results(SurveyId::new(*id).ok()?),
            ["consult-expert"] => Route::ConsultExpert,
            ["relationship-tips"] => Route::RelationshipTips,
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::References => "/references".to_string(),
            Route::Terms => "/terms".to_string(),
            Route::Privacy => "/privacy".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Faq => "/faq".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::InvitePartner => "/invite-partner".to_string(),
            Route::Survey(id) => format!("/survey/{}", id),
            Route::Results(id) => format!("/results/{}", id),
            Route::ConsultExpert => "/consult-expert".to_string(),
            Route::RelationshipTips => "/relationship-tips".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::Profile
                | Route::InvitePartner
                | Route::Survey(_)
                | Route::Results(_)
                | Route::ConsultExpert
                | Route::RelationshipTips
        )
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "path", rename_all = "lowercase")]
pub enum Navigation {
    Render(String),
    Redirect(String),
}

/// Stateless gate evaluated on every navigation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    pub const LOGIN_PATH: &'static str = "/login";
    pub const FALLBACK_PATH: &'static str = "/";

    pub fn resolve(path: &str, is_authenticated: bool) -> Navigation {
        match Route::parse(path) {
            Some(route) if route.requires_auth() && !is_authenticated => {
                Navigation::Redirect(Self::LOGIN_PATH.to_string())
            }
            Some(route) => Navigation::Render(route.path()),
            None => Navigation::Redirect(Self::FALLBACK_PATH.to_string()),
        }
    }
}
