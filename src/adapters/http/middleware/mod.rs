//! HTTP middleware for axum.
//!
//! - `auth` - Session gate and the signed-in user extractor

pub mod auth;

pub use auth::{require_session, RequireAuth};
