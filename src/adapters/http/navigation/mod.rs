//! Navigation HTTP adapter module.
//!
//! Exposes the page route guard and the health check.

pub mod handlers;
pub mod routes;

pub use routes::navigation_routes;
