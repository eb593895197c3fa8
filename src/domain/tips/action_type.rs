//! The closed set of improvement action types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionType {
    /// Aligning how each partner perceives the item.
    #[serde(rename = "認識合わせ")]
    Alignment,
    /// Raising how strongly the item is actually felt.
    #[serde(rename = "実感UP")]
    Realization,
    /// Adjusting what each partner asks of the other.
    #[serde(rename = "要望調整")]
    RequestAdjustment,
}

impl ActionType {
    pub const ALL: [ActionType; 3] = [
        ActionType::Alignment,
        ActionType::Realization,
        ActionType::RequestAdjustment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActionType::Alignment => "認識合わせ",
            ActionType::Realization => "実感UP",
            ActionType::RequestAdjustment => "要望調整",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| ValidationError::invalid_format("action_type", format!("unknown action type '{}'", s)))
    }
}
