//! User module - accounts and demographic profiles.
//!
//! A `User` is created on registration and carries a `UserProfile` whose
//! completion is measured over a fixed set of five required fields.

pub mod account;
pub mod profile;

pub use account::{Role, User};
pub use profile::{Gender, ProfilePatch, RequiredField, UserProfile};
