//! Dashboard handlers.
//!
//! The overview query and the in-memory focus list commands.

mod focus_action;
mod get_dashboard_overview;

pub use focus_action::{
    FocusActionCommand, FocusActionHandler, FocusError, UpdateFocusProgressCommand,
    UpdateFocusProgressHandler,
};
pub use get_dashboard_overview::{
    GetDashboardOverviewHandler, GetDashboardOverviewQuery, GetDashboardOverviewResult,
};
