//! CreateInvitationHandler - Query handler for the partner invite page.

use crate::domain::account::{FamilyCode, Invitation};
use crate::domain::user::User;

/// Query to build an invitation for the signed-in user.
#[derive(Debug, Clone)]
pub struct CreateInvitationQuery {
    pub user: Option<User>,
}

pub type CreateInvitationResult = Invitation;

/// Builds invite links from the user's family id, or a fresh code.
pub struct CreateInvitationHandler {
    public_origin: String,
}

impl CreateInvitationHandler {
    pub fn new(public_origin: impl Into<String>) -> Self {
        Self {
            public_origin: public_origin.into(),
        }
    }

    pub fn handle(&self, query: CreateInvitationQuery) -> CreateInvitationResult {
        let code = FamilyCode::for_user(query.user.as_ref(), &mut rand::thread_rng());
        Invitation::new(&self.public_origin, code)
    }
}
