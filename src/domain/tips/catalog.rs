//! Improvement tips keyed by `(item, action type)`.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

use super::action_type::ActionType;

const BUNDLED_TIPS: &str = include_str!("../../../assets/improvement_tips.yaml");

#[derive(Debug, Error)]
pub enum TipsError {
    #[error("failed to parse tips table: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate tip for item '{item}' and action type '{action_type}'")]
    Duplicate {
        item: String,
        action_type: ActionType,
    },
}

#[derive(Debug, Deserialize)]
struct TipsDocument {
    tips: Vec<ItemEntry>,
}

#[derive(Debug, Deserialize)]
struct ItemEntry {
    item: String,
    actions: Vec<ActionEntry>,
}

#[derive(Debug, Deserialize)]
struct ActionEntry {
    action_type: ActionType,
    name: String,
    steps: Vec<String>,
}

/// One concrete improvement action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tip {
    pub name: String,
    pub steps: Vec<String>,
}

/// Lookup table behind the relationship tips page.
///
/// Unmapped lookups return an empty label or an empty step list, never an
/// error.
#[derive(Debug, Clone, Default)]
pub struct TipsCatalog {
    tips: HashMap<(String, ActionType), Tip>,
    items: Vec<String>,
}

impl TipsCatalog {
    pub fn bundled() -> Result<Self, TipsError> {
        Self::from_yaml(BUNDLED_TIPS)
    }

    pub fn from_yaml(source: &str) -> Result<Self, TipsError> {
        let document: TipsDocument = serde_yaml::from_str(source)?;
        let mut catalog = Self::default();

        for entry in document.tips {
            if !catalog.items.contains(&entry.item) {
                catalog.items.push(entry.item.clone());
            }
            for action in entry.actions {
                let key = (entry.item.clone(), action.action_type);
                if catalog.tips.contains_key(&key) {
                    return Err(TipsError::Duplicate {
                        item: entry.item,
                        action_type: action.action_type,
                    });
                }
                catalog.tips.insert(
                    key,
                    Tip {
                        name: action.name,
                        steps: action.steps,
                    },
                );
            }
        }

        Ok(catalog)
    }

    pub fn get(&self, item: &str, action_type: ActionType) -> Option<&Tip> {
        self.tips.get(&(item.to_string(), action_type))
    }

    pub fn action_name(&self, item: &str, action_type: ActionType) -> &str {
        self.get(item, action_type).map(|t| t.name.as_str()).unwrap_or("")
    }

    pub fn improvement_steps(&self, item: &str, action_type: ActionType) -> &[String] {
        self.get(item, action_type).map(|t| t.steps.as_slice()).unwrap_or(&[])
    }

    /// Like [`Self::action_name`] with an unparsed action type.
    pub fn action_name_for(&self, item: &str, action_type: &str) -> &str {
        action_type
            .parse::<ActionType>()
            .map(|t| self.action_name(item, t))
            .unwrap_or("")
    }

    /// Like [`Self::improvement_steps`] with an unparsed action type.
    pub fn improvement_steps_for(&self, item: &str, action_type: &str) -> &[String] {
        action_type
            .parse::<ActionType>()
            .map(|t| self.improvement_steps(item, t))
            .unwrap_or(&[])
    }

    /// Items in table order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> TipsCatalog {
        TipsCatalog::bundled().unwrap()
    }

    #[test]
    fn bundled_table_covers_every_item_and_type() {
        let catalog = bundled();
        assert_eq!(catalog.items().len(), 19);
        assert_eq!(catalog.len(), 19 * 3);
        for item in catalog.items() {
            for action_type in ActionType::ALL {
                assert!(!catalog.action_name(item, action_type).is_empty());
                assert_eq!(catalog.improvement_steps(item, action_type).len(), 3);
            }
        }
    }

    #[test]
    fn resolves_known_pair() {
        let catalog = bundled();
        assert_eq!(catalog.action_name("共感理解", ActionType::Alignment), "感情1分シェア");
        assert_eq!(
            catalog.improvement_steps("共感理解", ActionType::Alignment)[0],
            "就寝前に各自タイマー1分セット"
        );
        assert_eq!(catalog.action_name_for("共感理解", "認識合わせ"), "感情1分シェア");
    }

    #[test]
    fn unmapped_pairs_are_empty() {
        let catalog = bundled();
        assert_eq!(catalog.action_name("存在しない項目", ActionType::Alignment), "");
        assert!(catalog.improvement_steps("存在しない項目", ActionType::Realization).is_empty());
        assert_eq!(catalog.action_name_for("共感理解", "unknown"), "");
        assert!(catalog.improvement_steps_for("共感理解", "unknown").is_empty());
    }

    #[test]
    fn rejects_duplicate_entries() {
        let yaml = r#"
tips:
  - item: "a"
    actions:
      - action_type: "実感UP"
        name: "x"
        steps: []
      - action_type: "実感UP"
        name: "y"
        steps: []
"#;
        assert!(matches!(
            TipsCatalog::from_yaml(yaml),
            Err(TipsError::Duplicate { .. })
        ));
    }

    #[test]
    fn rejects_unknown_action_type() {
        let yaml = r#"
tips:
  - item: "a"
    actions:
      - action_type: "other"
        name: "x"
        steps: []
"#;
        assert!(matches!(TipsCatalog::from_yaml(yaml), Err(TipsError::Parse(_))));
    }
}
