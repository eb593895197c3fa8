//! HTTP DTOs for survey endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PageNumber, Score};
use crate::domain::survey::{Answers, QuestionAnswer};

#[derive(Debug, Deserialize)]
pub struct SetPageRequest {
    pub page: i64,
}

#[derive(Debug, Deserialize)]
pub struct SetAnswerRequest {
    /// Answer key such as `q1:expectation`; any non-empty key is stored
    pub key: String,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct SetAnswerResponse {
    pub key: String,
    /// The stored value after clamping
    pub value: Score,
}

/// Scratch answers and page cursor of the survey in progress.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub current_page: PageNumber,
    pub answers: Answers,
}

/// Body of a response submission. Must carry at least one answer.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitResponseRequest {
    #[serde(default)]
    pub answers: Vec<QuestionAnswer>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseResponse {
    pub accepted: bool,
    pub response_count: usize,
}
