//! Family Lab - Relationship assessment service
//!
//! Partners rate what they expect and what they experience across
//! relationship categories; the gaps between the two drive results,
//! improvement tips and the dashboard.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
