//! Tips handlers - improvement areas and action lookups.

mod get_improvement_areas;
mod get_tip;

pub use get_improvement_areas::{
    GetImprovementAreasHandler, GetImprovementAreasQuery, GetImprovementAreasResult,
    ImprovementAreasView,
};
pub use get_tip::{GetTipHandler, GetTipQuery, GetTipResult, TipView};
