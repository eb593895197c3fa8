//! User account record.

use serde::{Deserialize, Serialize};

use super::profile::{ProfilePatch, UserProfile};
use crate::domain::foundation::{Percentage, UserId};

/// Account role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// The signed-in user together with their profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub profile: UserProfile,
    /// Household group the user belongs to, once joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_id: Option<String>,
}

impl User {
    /// Creates a regular user with an empty profile.
    pub fn new(id: UserId, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            role: Role::User,
            profile: UserProfile::default(),
            family_id: None,
        }
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_family_id(mut self, family_id: impl Into<String>) -> Self {
        self.family_id = Some(family_id.into());
        self
    }

    pub fn update_profile(&mut self, patch: ProfilePatch) {
        self.profile.apply(patch);
    }

    pub fn profile_completion(&self) -> Percentage {
        self.profile.completion()
    }
}
