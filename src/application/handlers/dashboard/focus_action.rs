//! Focus list command handlers.
//!
//! The focus list lives in memory only and is shared with the dashboard
//! overview.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::dashboard::{FocusedAction, FocusedActions};
use crate::domain::tips::ActionType;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FocusError {
    #[error("Action name must not be empty")]
    EmptyActionName,

    #[error("No focused action at position {0}")]
    NotFound(usize),
}

/// Command to start focusing on an improvement action.
#[derive(Debug, Clone)]
pub struct FocusActionCommand {
    pub action_type: ActionType,
    pub action_name: String,
}

/// Command to record progress on a focused action.
#[derive(Debug, Clone)]
pub struct UpdateFocusProgressCommand {
    pub index: usize,
    /// Out-of-range values are clamped to 0-100.
    pub progress: i64,
}

pub struct FocusActionHandler {
    focused: Arc<RwLock<FocusedActions>>,
}

impl FocusActionHandler {
    pub fn new(focused: Arc<RwLock<FocusedActions>>) -> Self {
        Self { focused }
    }

    /// Adds the action and returns the updated list. Already focused
    /// actions are left as they are.
    pub async fn handle(&self, cmd: FocusActionCommand) -> Result<Vec<FocusedAction>, FocusError> {
        let name = cmd.action_name.trim();
        if name.is_empty() {
            return Err(FocusError::EmptyActionName);
        }

        let mut focused = self.focused.write().await;
        if focused.add(cmd.action_type, name) {
            tracing::info!(action = name, "focused action added");
        }
        Ok(focused.as_slice().to_vec())
    }
}

pub struct UpdateFocusProgressHandler {
    focused: Arc<RwLock<FocusedActions>>,
}

impl UpdateFocusProgressHandler {
    pub fn new(focused: Arc<RwLock<FocusedActions>>) -> Self {
        Self { focused }
    }

    pub async fn handle(&self, cmd: UpdateFocusProgressCommand) -> Result<FocusedAction, FocusError> {
        let mut focused = self.focused.write().await;
        focused
            .set_progress(cmd.index, cmd.progress)
            .cloned()
            .ok_or(FocusError::NotFound(cmd.index))
    }
}
