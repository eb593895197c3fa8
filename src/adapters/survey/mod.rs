//! Survey provider adapters.

mod mock;

pub use mock::MockSurveyProvider;
