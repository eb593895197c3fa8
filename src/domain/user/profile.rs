//! User profile value objects and completion tracking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// Self-reported gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

/// Demographic profile attached to a user.
///
/// Serialized with camelCase keys to stay compatible with persisted
/// `auth-storage` documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefecture: Option<String>,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_years: Option<u8>,
}

/// Fields that count towards profile completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    BirthDate,
    Gender,
    MarriageDate,
    Occupation,
    Prefecture,
}

impl RequiredField {
    pub const ALL: [RequiredField; 5] = [
        RequiredField::BirthDate,
        RequiredField::Gender,
        RequiredField::MarriageDate,
        RequiredField::Occupation,
        RequiredField::Prefecture,
    ];
}

impl UserProfile {
    /// Whether a required field holds a usable value.
    ///
    /// Blank strings count as missing.
    pub fn has(&self, field: RequiredField) -> bool {
        match field {
            RequiredField::BirthDate => self.birth_date.is_some(),
            RequiredField::Gender => self.gender.is_some(),
            RequiredField::MarriageDate => self.marriage_date.is_some(),
            RequiredField::Occupation => is_filled(&self.occupation),
            RequiredField::Prefecture => is_filled(&self.prefecture),
        }
    }

    /// Required fields still missing, in display order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|f| !self.has(*f))
            .collect()
    }

    /// round(100 * present / 5).
    pub fn completion(&self) -> Percentage {
        let present = RequiredField::ALL.iter().filter(|f| self.has(**f)).count();
        Percentage::of(present, RequiredField::ALL.len())
    }

    /// Merges the present fields of `patch` into this profile.
    pub fn apply(&mut self, patch: ProfilePatch) {
        let ProfilePatch {
            birth_date,
            gender,
            marriage_date,
            occupation,
            prefecture,
            has_children,
            age,
            marriage_years,
        } = patch;

        if birth_date.is_some() {
            self.birth_date = birth_date;
        }
        if gender.is_some() {
            self.gender = gender;
        }
        if marriage_date.is_some() {
            self.marriage_date = marriage_date;
        }
        if occupation.is_some() {
            self.occupation = occupation;
        }
        if prefecture.is_some() {
            self.prefecture = prefecture;
        }
        if let Some(has_children) = has_children {
            self.has_children = has_children;
        }
        if age.is_some() {
            self.age = age;
        }
        if marriage_years.is_some() {
            self.marriage_years = marriage_years;
        }
    }
}

fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Partial profile update. Absent fields leave the profile untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub marriage_date: Option<NaiveDate>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub prefecture: Option<String>,
    #[serde(default)]
    pub has_children: Option<bool>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub marriage_years: Option<u8>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
