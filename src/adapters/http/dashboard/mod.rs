//! Dashboard HTTP adapter module.
//!
//! The overview and the focus list.

pub mod handlers;
pub mod routes;

pub use routes::dashboard_routes;
