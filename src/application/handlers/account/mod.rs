//! Account handlers - password reset and partner invitations.

mod create_invitation;
mod request_password_reset;

pub use create_invitation::{
    CreateInvitationHandler, CreateInvitationQuery, CreateInvitationResult,
};
pub use request_password_reset::{
    RequestPasswordResetCommand, RequestPasswordResetHandler, RequestPasswordResetResult,
};
