//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `user` - Accounts and profile completion
//! - `survey` - Survey catalog, in-progress answers and submitted responses
//! - `results` - Gap analysis and the results read model
//! - `tips` - Improvement actions keyed by item and action type
//! - `dashboard` - Dashboard read model and focused actions
//! - `navigation` - Route table and authentication guard
//! - `forms` - Authentication form validation
//! - `account` - Partner invitations and password reset requests

pub mod account;
pub mod dashboard;
pub mod forms;
pub mod foundation;
pub mod navigation;
pub mod results;
pub mod survey;
pub mod tips;
pub mod user;
