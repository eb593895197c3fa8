//! Application handlers.
//!
//! Command and query handlers that orchestrate stores, ports and domain
//! read models.

pub mod account;
pub mod dashboard;
pub mod results;
pub mod tips;

pub use account::{
    CreateInvitationHandler, CreateInvitationQuery, CreateInvitationResult,
    RequestPasswordResetCommand, RequestPasswordResetHandler, RequestPasswordResetResult,
};
pub use dashboard::{
    FocusActionCommand, FocusActionHandler, FocusError, GetDashboardOverviewHandler,
    GetDashboardOverviewQuery, GetDashboardOverviewResult, UpdateFocusProgressCommand,
    UpdateFocusProgressHandler,
};
pub use results::{GetResultsViewHandler, GetResultsViewQuery, GetResultsViewResult, ResultsError};
pub use tips::{
    GetImprovementAreasHandler, GetImprovementAreasQuery, GetImprovementAreasResult,
    GetTipHandler, GetTipQuery, GetTipResult, ImprovementAreasView, TipView,
};
