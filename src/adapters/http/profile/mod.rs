//! Profile HTTP adapter module.
//!
//! Profile updates and partner invitations for the signed-in user.

pub mod handlers;
pub mod routes;

pub use routes::profile_routes;
