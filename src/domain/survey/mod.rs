//! Survey module - definitions, in-progress answers, and submitted responses.

pub mod answers;
pub mod catalog;
pub mod definition;
pub mod response;

pub use answers::{answer_key, Answers, Dimension};
pub use catalog::{CatalogError, SurveyCatalog};
pub use definition::{Question, QuestionLocation, Subcategory, Survey, SurveyKind, SurveyPage};
pub use response::{QuestionAnswer, SurveyResponse};
