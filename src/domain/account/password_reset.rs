//! Password reset requests.
//!
//! The token only decorates the link; nothing verifies it later.

use rand::Rng;
use serde::Serialize;

use super::token::base36;

pub const RESET_TOKEN_CHARS: usize = 13;

pub const RESET_SENT_MESSAGE: &str =
    "パスワードリセットのメールを送信しました。メールの指示に従ってパスワードを再設定してください。";
pub const RESET_FAILED_MESSAGE: &str =
    "パスワードリセットメールの送信に失敗しました。しばらく経ってから再度お試しください。";

/// Template parameters handed to the mailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordResetEmail {
    pub to_email: String,
    pub to_name: String,
    pub reset_link: String,
}

impl PasswordResetEmail {
    pub fn new<R: Rng + ?Sized>(email: &str, origin: &str, rng: &mut R) -> Self {
        let token = base36(rng, RESET_TOKEN_CHARS);
        Self {
            to_email: email.to_string(),
            to_name: email.split('@').next().unwrap_or_default().to_string(),
            reset_link: format!("{}/reset-password/{}", origin.trim_end_matches('/'), token),
        }
    }
}

/// What the forgot-password page shows after submitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetOutcome {
    pub sent: bool,
    pub message: String,
}

impl ResetOutcome {
    pub fn sent() -> Self {
        Self {
            sent: true,
            message: RESET_SENT_MESSAGE.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            sent: false,
            message: RESET_FAILED_MESSAGE.to_string(),
        }
    }
}
