//! Synchronous validation of the authentication forms.
//!
//! Messages are shown to users verbatim.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::account::FamilyCode;

pub const EMAIL_REQUIRED: &str = "メールアドレスを入力してください";
pub const EMAIL_INVALID: &str = "有効なメールアドレスを入力してください";
pub const PASSWORD_REQUIRED: &str = "パスワードを入力してください";
pub const PASSWORD_TOO_SHORT: &str = "パスワードは6文字以上で入力してください";
pub const NAME_REQUIRED: &str = "お名前を入力してください";
pub const FAMILY_CODE_INVALID: &str = "家族コードは英数字・ハイフン・アンダースコアの32文字以内で入力してください";

pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex")
});

/// Per-field error messages. Absent fields passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "familyCode", skip_serializing_if = "Option::is_none")]
    pub family_code: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.family_code.is_none()
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !EMAIL_SHAPE.is_match(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

pub fn validate_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some(PASSWORD_REQUIRED)
    } else if password.chars().count() < MIN_PASSWORD_CHARS {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

pub fn validate_name(name: &str) -> Option<&'static str> {
    name.trim().is_empty().then_some(NAME_REQUIRED)
}

/// A blank code means no household to join.
pub fn validate_family_code(code: Option<&str>) -> Option<&'static str> {
    match code {
        Some(code) if !code.trim().is_empty() && FamilyCode::parse(code).is_none() => {
            Some(FAMILY_CODE_INVALID)
        }
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        FieldErrors {
            email: validate_email(&self.email).map(String::from),
            password: validate_password(&self.password).map(String::from),
            ..Default::default()
        }
        .into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Household code carried over from an invitation link.
    #[serde(default)]
    pub family_code: Option<String>,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        FieldErrors {
            name: validate_name(&self.name).map(String::from),
            email: validate_email(&self.email).map(String::from),
            password: validate_password(&self.password).map(String::from),
            family_code: validate_family_code(self.family_code.as_deref()).map(String::from),
        }
        .into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ForgotPasswordForm {
    #[serde(default)]
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        FieldErrors {
            email: validate_email(&self.email).map(String::from),
            ..Default::default()
        }
        .into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn valid_login_passes() {
        assert!(login("a@b.com", "secret").validate().is_ok());
    }

    #[test]
    fn empty_login_reports_both_fields() {
        let errors = login("", "").validate().unwrap_err();
        assert_eq!(errors.email.as_deref(), Some(EMAIL_REQUIRED));
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_REQUIRED));
        assert!(errors.name.is_none());
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["plain", "a@b", "@.", "a b@c"] {
            assert_eq!(validate_email(email), Some(EMAIL_INVALID), "email {}", email);
        }
        assert_eq!(validate_email("名前@例え.jp"), None);
    }

    #[test]
    fn short_password_counts_characters() {
        assert_eq!(validate_password("12345"), Some(PASSWORD_TOO_SHORT));
        assert_eq!(validate_password("123456"), None);
        assert_eq!(validate_password("パスワード秘密"), None);
    }

    #[test]
    fn register_requires_name() {
        let form = RegisterForm {
            name: "  ".to_string(),
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
            family_code: None,
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.name.as_deref(), Some(NAME_REQUIRED));
        assert!(errors.email.is_none());
    }

    #[test]
    fn register_rejects_family_code_unsafe_for_links() {
        let mut form = RegisterForm {
            name: "Hanako".to_string(),
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
            family_code: Some("FAM-1&x=2".to_string()),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.family_code.as_deref(), Some(FAMILY_CODE_INVALID));

        form.family_code = Some("FAM-ABC123".to_string());
        assert!(form.validate().is_ok());
        form.family_code = Some("  ".to_string());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn forgot_password_checks_email_only() {
        let form = ForgotPasswordForm {
            email: "x".to_string(),
        };
        assert_eq!(
            form.validate().unwrap_err(),
            FieldErrors {
                email: Some(EMAIL_INVALID.to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn field_errors_serialize_present_fields_only() {
        let errors = login("", "secret").validate().unwrap_err();
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({"email": EMAIL_REQUIRED})
        );
    }
}
