//! Authentication HTTP adapter module.
//!
//! Login, registration, logout, session lookup and password reset requests.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::auth_routes;
