pub mod focused_action;
pub mod overview;

pub use focused_action::{FocusedAction, FocusedActions};
pub use overview::{DashboardOverview, PartnerStatus, SurveySummary};
