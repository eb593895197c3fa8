//! Gap severity thresholds.

use serde::Serialize;

/// How far reality falls short of expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GapLevel {
    Minimal,
    Low,
    Moderate,
    High,
    Critical,
}

impl GapLevel {
    pub fn from_gap(gap: f64) -> Self {
        if gap >= 2.0 {
            GapLevel::Critical
        } else if gap >= 1.5 {
            GapLevel::High
        } else if gap >= 1.0 {
            GapLevel::Moderate
        } else if gap >= 0.5 {
            GapLevel::Low
        } else {
            GapLevel::Minimal
        }
    }

    /// Display tone used when rendering the gap badge.
    pub fn tone(&self) -> &'static str {
        match self {
            GapLevel::Critical => "red",
            GapLevel::High => "orange",
            GapLevel::Moderate => "yellow",
            GapLevel::Low => "blue",
            GapLevel::Minimal => "green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_lower_bounds() {
        assert_eq!(GapLevel::from_gap(2.0), GapLevel::Critical);
        assert_eq!(GapLevel::from_gap(1.99), GapLevel::High);
        assert_eq!(GapLevel::from_gap(1.5), GapLevel::High);
        assert_eq!(GapLevel::from_gap(1.0), GapLevel::Moderate);
        assert_eq!(GapLevel::from_gap(0.5), GapLevel::Low);
        assert_eq!(GapLevel::from_gap(0.49), GapLevel::Minimal);
    }

    #[test]
    fn negative_gap_is_minimal() {
        assert_eq!(GapLevel::from_gap(-1.2), GapLevel::Minimal);
    }

    #[test]
    fn tones_match_levels() {
        assert_eq!(GapLevel::Critical.tone(), "red");
        assert_eq!(GapLevel::High.tone(), "orange");
        assert_eq!(GapLevel::Moderate.tone(), "yellow");
        assert_eq!(GapLevel::Low.tone(), "blue");
        assert_eq!(GapLevel::Minimal.tone(), "green");
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(GapLevel::Critical > GapLevel::High);
        assert!(GapLevel::Low > GapLevel::Minimal);
    }
}
