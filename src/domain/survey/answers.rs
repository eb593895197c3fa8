//! In-progress answer scratch space.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{QuestionId, Score};

/// The two scales every question is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Expectation,
    Reality,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Expectation => "expectation",
            Dimension::Reality => "reality",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key under which the survey UI stores one dimension of one question.
pub fn answer_key(question_id: &QuestionId, dimension: Dimension) -> String {
    format!("{}:{}", question_id, dimension)
}

/// Question key to score. Any string key is accepted; values are clamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, Score>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: f64) -> Score {
        let score = Score::new(value);
        self.0.insert(key.into(), score);
        score
    }

    pub fn get(&self, key: &str) -> Option<Score> {
        self.0.get(key).copied()
    }

    pub fn dimension(&self, question_id: &QuestionId, dimension: Dimension) -> Option<Score> {
        self.get(&answer_key(question_id, dimension))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Score)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
