//! Navigation module - route table and guard.

pub mod route;

pub use route::{Navigation, Route, RouteGuard};
