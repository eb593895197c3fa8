//! Client state stores.
//!
//! Each store keeps its state in a `watch` channel. Actions mutate state
//! synchronously, await ports in between, log failures and never return
//! errors.

mod auth_store;
pub mod persisted;
mod survey_store;

pub use auth_store::{AuthState, AuthStore};
pub use survey_store::{SurveyState, SurveyStore, SurveyStoreError};
