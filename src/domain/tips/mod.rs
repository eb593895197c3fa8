//! Tips module - improvement actions and the areas they apply to.

pub mod action_type;
pub mod areas;
pub mod catalog;

pub use action_type::ActionType;
pub use areas::{improvement_areas, top_item, ActionSummary, AreaCategory, AreaItem, AreaSubcategory};
pub use catalog::{Tip, TipsCatalog, TipsError};
