//! Results handlers.

mod get_results_view;

pub use get_results_view::{
    GetResultsViewHandler, GetResultsViewQuery, GetResultsViewResult, ResultsError,
};
