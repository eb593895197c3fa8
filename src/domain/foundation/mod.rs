//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the Family Lab domain.

mod errors;
mod ids;
mod page;
mod percentage;
mod score;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{QuestionId, SurveyId, UserId};
pub use page::PageNumber;
pub use percentage::Percentage;
pub use score::Score;
pub use timestamp::Timestamp;
