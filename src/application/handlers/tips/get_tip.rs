//! GetTipHandler - Query handler for a single improvement action.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::tips::TipsCatalog;

/// Looks up the action for an item and action-type label.
///
/// Unknown items or labels produce an empty name and no steps.
#[derive(Debug, Clone)]
pub struct GetTipQuery {
    pub item: String,
    pub action_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipView {
    pub item: String,
    pub action_type: String,
    pub action_name: String,
    pub steps: Vec<String>,
}

pub type GetTipResult = TipView;

pub struct GetTipHandler {
    tips: Arc<TipsCatalog>,
}

impl GetTipHandler {
    pub fn new(tips: Arc<TipsCatalog>) -> Self {
        Self { tips }
    }

    pub fn handle(&self, query: GetTipQuery) -> GetTipResult {
        let action_name = self.tips.action_name_for(&query.item, &query.action_type).to_string();
        let steps = self.tips.improvement_steps_for(&query.item, &query.action_type).to_vec();
        TipView {
            item: query.item,
            action_type: query.action_type,
            action_name,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> GetTipHandler {
        GetTipHandler::new(Arc::new(TipsCatalog::bundled().unwrap()))
    }

    fn query(item: &str, action_type: &str) -> GetTipQuery {
        GetTipQuery {
            item: item.to_string(),
            action_type: action_type.to_string(),
        }
    }

    #[test]
    fn mapped_pair_returns_name_and_steps() {
        let tip = handler().handle(query("共感理解", "認識合わせ"));
        assert_eq!(tip.action_name, "感情1分シェア");
        assert_eq!(tip.steps.len(), 3);
    }

    #[test]
    fn unmapped_pair_is_empty() {
        let tip = handler().handle(query("存在しない項目", "認識合わせ"));
        assert_eq!(tip.action_name, "");
        assert!(tip.steps.is_empty());

        let tip = handler().handle(query("共感理解", "unknown"));
        assert_eq!(tip.action_name, "");
        assert!(tip.steps.is_empty());
    }
}
