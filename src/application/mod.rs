//! Application layer - stores, commands, queries and handlers.
//!
//! Stores hold client state and persist it through the state storage port.
//! Handlers build read models from store state and drive the remaining
//! ports.

pub mod handlers;
pub mod services;
pub mod stores;

pub use services::{AppServices, ServiceDependencies};
pub use stores::{AuthState, AuthStore, SurveyState, SurveyStore, SurveyStoreError};
