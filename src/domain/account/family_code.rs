//! Household codes and partner invitation links.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use super::token::base36;
use crate::domain::user::User;

pub const FAMILY_CODE_PREFIX: &str = "FAM-";
const GENERATED_CODE_CHARS: usize = 6;

// Codes travel unescaped in invitation query strings.
static CODE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]{1,32}$").expect("family code pattern is a valid regex")
});

/// Code a second user enters at registration to join a household.
///
/// Generated codes are not checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FamilyCode(String);

impl FamilyCode {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(format!(
            "{}{}",
            FAMILY_CODE_PREFIX,
            base36(rng, GENERATED_CODE_CHARS).to_uppercase()
        ))
    }

    /// Accepts up to 32 ASCII letters, digits, `-` or `_`.
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        CODE_SHAPE.is_match(code).then(|| Self(code.to_string()))
    }

    /// The user's own household code, or a freshly generated one.
    pub fn for_user<R: Rng + ?Sized>(user: Option<&User>, rng: &mut R) -> Self {
        match user.and_then(|u| u.family_id.as_deref()).and_then(Self::parse) {
            Some(code) => code,
            None => Self::generate(rng),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FamilyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the invite page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub family_code: FamilyCode,
    pub invite_url: String,
    /// Text encoded into the QR code.
    pub qr_payload: String,
}

impl Invitation {
    pub fn new(origin: &str, family_code: FamilyCode) -> Self {
        let invite_url = format!(
            "{}/register?familyCode={}",
            origin.trim_end_matches('/'),
            family_code
        );
        Self {
            family_code,
            qr_payload: invite_url.clone(),
            invite_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn user(family_id: Option<&str>) -> User {
        let user = User::new(UserId::new("1").unwrap(), "a@b.com", "Test User");
        match family_id {
            Some(id) => user.with_family_id(id),
            None => user,
        }
    }

    #[test]
    fn generated_code_has_prefix_and_six_uppercase_chars() {
        let code = FamilyCode::generate(&mut StdRng::seed_from_u64(3));
        let suffix = code.as_str().strip_prefix("FAM-").unwrap();
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn existing_family_id_wins() {
        let mut rng = StdRng::seed_from_u64(3);
        let code = FamilyCode::for_user(Some(&user(Some("FAM-HOME01"))), &mut rng);
        assert_eq!(code.as_str(), "FAM-HOME01");
    }

    #[test]
    fn missing_family_id_generates() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(FamilyCode::for_user(Some(&user(None)), &mut rng)
            .as_str()
            .starts_with("FAM-"));
        assert!(FamilyCode::for_user(None, &mut rng).as_str().starts_with("FAM-"));
    }

    #[test]
    fn parse_accepts_url_safe_codes_only() {
        assert_eq!(FamilyCode::parse(" FAM-AB_12 ").unwrap().as_str(), "FAM-AB_12");
        for code in ["", "a&b=c", "FAM#1", "with space", "家族", "A".repeat(33).as_str()] {
            assert!(FamilyCode::parse(code).is_none(), "code {:?}", code);
        }
    }

    #[test]
    fn unsafe_stored_family_id_is_replaced() {
        let mut rng = StdRng::seed_from_u64(3);
        let invitation = Invitation::new(
            "https://family-lab.example",
            FamilyCode::for_user(Some(&user(Some("a&b#c"))), &mut rng),
        );
        assert!(invitation.family_code.as_str().starts_with("FAM-"));
        assert!(!invitation.invite_url.contains('&'));
        assert!(!invitation.invite_url.contains('#'));
    }

    #[test]
    fn invitation_links_to_registration() {
        let code = FamilyCode("FAM-ABC123".to_string());
        let invitation = Invitation::new("https://family-lab.example/", code);
        assert_eq!(
            invitation.invite_url,
            "https://family-lab.example/register?familyCode=FAM-ABC123"
        );
        assert_eq!(invitation.qr_payload, invitation.invite_url);
    }
}
