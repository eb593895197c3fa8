//! Survey page cursor (1-indexed, bounded).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Page number within a survey, always within `[1, PageNumber::LAST]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct PageNumber(u8);

impl PageNumber {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(4);

    /// Creates a page number, clamping into the survey's page range.
    pub fn clamped(page: i64) -> Self {
        Self(page.clamp(Self::FIRST.0 as i64, Self::LAST.0 as i64) as u8)
    }

    /// Creates a page number, returning error if out of range.
    pub fn try_new(page: i64) -> Result<Self, ValidationError> {
        if page < Self::FIRST.0 as i64 || page > Self::LAST.0 as i64 {
            return Err(ValidationError::out_of_range(
                "page",
                Self::FIRST.0 as i32,
                Self::LAST.0 as i32,
                page.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            ));
        }
        Ok(Self(page as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_first(&self) -> bool {
        *self == Self::FIRST
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }

    /// The following page, or `None` on the last page.
    pub fn next(&self) -> Option<Self> {
        (!self.is_last()).then(|| Self(self.0 + 1))
    }

    /// The preceding page, or `None` on the first page.
    pub fn previous(&self) -> Option<Self> {
        (!self.is_first()).then(|| Self(self.0 - 1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<i64> for PageNumber {
    fn from(page: i64) -> Self {
        Self::clamped(page)
    }
}

impl From<PageNumber> for u8 {
    fn from(page: PageNumber) -> Self {
        page.0
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.0, Self::LAST.0)
    }
}
