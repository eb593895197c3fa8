//! Score value object for survey answers (0-5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A survey score, always within `[0, 5]`.
///
/// Construction clamps; deserialization goes through the same clamp so a
/// hand-edited persisted value cannot escape the scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 5.0;

    /// Creates a score, clamping to the 0-5 scale. NaN becomes zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Mean of the given scores, `None` when empty.
    pub fn mean<I>(scores: I) -> Option<Self>
    where
        I: IntoIterator<Item = Score>,
    {
        let (sum, count) = scores
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), s| (sum + s.0, count + 1));
        if count == 0 {
            None
        } else {
            Some(Self::new(sum / count as f64))
        }
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
