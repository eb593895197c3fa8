//! Survey HTTP adapter module.
//!
//! Catalog lookups, the in-progress answer sheet and response submission.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::survey_routes;
