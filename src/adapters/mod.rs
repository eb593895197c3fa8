//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Mock authentication backend
//! - `email` - Password reset mailers (EmailJS, logging, recording)
//! - `http` - axum REST API
//! - `storage` - State storage (filesystem, in-memory)
//! - `survey` - Mock survey provider

pub mod auth;
pub mod email;
pub mod http;
pub mod storage;
pub mod survey;
