//! Results HTTP adapter module.

pub mod handlers;
pub mod routes;

pub use routes::results_routes;
