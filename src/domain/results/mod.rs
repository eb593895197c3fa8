//! Results module - gap classification, aggregation and the results read model.

pub mod analysis;
pub mod comparison;
pub mod gap;
pub mod view;

pub use analysis::{compare, latest_for, rank_by_gap, with_demo_partner};
pub use comparison::{
    CategoryDetail, PartnerScores, QuestionComparison, ResultComparison, SubcategoryDetail,
    SurveyResults,
};
pub use gap::GapLevel;
pub use view::{completed_surveys, CompletedSurvey, ResultsView};
