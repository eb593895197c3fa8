//! Improvement actions the user chose to focus on.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::tips::ActionType;

/// Days given to a newly focused action.
pub const DEFAULT_DAYS_LEFT: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusedAction {
    pub action_type: ActionType,
    pub action_name: String,
    pub progress: Percentage,
    pub days_left: u32,
}

impl FocusedAction {
    pub fn new(action_type: ActionType, action_name: impl Into<String>) -> Self {
        Self {
            action_type,
            action_name: action_name.into(),
            progress: Percentage::ZERO,
            days_left: DEFAULT_DAYS_LEFT,
        }
    }

    pub fn with_progress(mut self, progress: u8, days_left: u32) -> Self {
        self.progress = Percentage::new(progress);
        self.days_left = days_left;
        self
    }
}

/// In-memory focus list. Never persisted; a restart brings back the
/// default list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FocusedActions(Vec<FocusedAction>);

impl FocusedActions {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Adds an action unless one with the same name is already focused.
    ///
    /// Returns whether the list changed.
    pub fn add(&mut self, action_type: ActionType, action_name: &str) -> bool {
        if self.0.iter().any(|a| a.action_name == action_name) {
            return false;
        }
        self.0.push(FocusedAction::new(action_type, action_name));
        true
    }

    /// Sets progress on the action at `index`, clamped to 0-100.
    pub fn set_progress(&mut self, index: usize, progress: i64) -> Option<&FocusedAction> {
        let action = self.0.get_mut(index)?;
        action.progress = Percentage::new(progress.clamp(0, 100) as u8);
        Some(action)
    }

    pub fn as_slice(&self) -> &[FocusedAction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FocusedActions {
    fn default() -> Self {
        Self(vec![
            FocusedAction::new(ActionType::Alignment, "感情1分シェア").with_progress(70, 5)
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_has_one_started_action() {
        let actions = FocusedActions::default();
        assert_eq!(actions.len(), 1);
        let first = &actions.as_slice()[0];
        assert_eq!(first.action_type, ActionType::Alignment);
        assert_eq!(first.action_name, "感情1分シェア");
        assert_eq!(first.progress.value(), 70);
        assert_eq!(first.days_left, 5);
    }

    #[test]
    fn add_ignores_duplicates() {
        let mut actions = FocusedActions::empty();
        assert!(actions.add(ActionType::Realization, "感謝リレー"));
        assert!(!actions.add(ActionType::Realization, "感謝リレー"));
        assert_eq!(actions.len(), 1);
        assert_eq!(actions.as_slice()[0].progress, Percentage::ZERO);
    }

    #[test]
    fn progress_is_clamped() {
        let mut actions = FocusedActions::default();
        assert_eq!(actions.set_progress(0, 150).unwrap().progress.value(), 100);
        assert_eq!(actions.set_progress(0, -5).unwrap().progress.value(), 0);
        assert!(actions.set_progress(3, 10).is_none());
    }

    #[test]
    fn serializes_as_camel_case_list() {
        let json = serde_json::to_value(FocusedActions::default()).unwrap();
        assert_eq!(json[0]["actionType"], "認識合わせ");
        assert_eq!(json[0]["daysLeft"], 5);
    }
}
