//! Account module - household invitations and password reset requests.

pub mod family_code;
pub mod password_reset;
pub mod token;

pub use family_code::{FamilyCode, Invitation, FAMILY_CODE_PREFIX};
pub use password_reset::{PasswordResetEmail, ResetOutcome, RESET_FAILED_MESSAGE, RESET_SENT_MESSAGE};
