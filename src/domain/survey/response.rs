//! Submitted survey responses.

use serde::{Deserialize, Serialize};

use super::answers::{Answers, Dimension};
use super::definition::Survey;
use crate::domain::foundation::{QuestionId, Score, SurveyId, Timestamp, UserId};

/// Both scores given for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnswer {
    pub question_id: QuestionId,
    pub expectation: Score,
    pub reality: Score,
}

impl QuestionAnswer {
    pub fn new(question_id: QuestionId, expectation: f64, reality: f64) -> Self {
        Self {
            question_id,
            expectation: Score::new(expectation),
            reality: Score::new(reality),
        }
    }

    pub fn gap(&self) -> f64 {
        self.expectation.value() - self.reality.value()
    }
}

/// A user's submitted answers for one survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub survey_id: SurveyId,
    pub user_id: UserId,
    pub answers: Vec<QuestionAnswer>,
    pub submitted_at: Timestamp,
}

impl SurveyResponse {
    pub fn new(survey_id: SurveyId, user_id: UserId, answers: Vec<QuestionAnswer>) -> Self {
        Self {
            survey_id,
            user_id,
            answers,
            submitted_at: Timestamp::now(),
        }
    }

    /// Builds a response from the scratch answers of `survey`.
    ///
    /// Questions missing either dimension are left out.
    pub fn from_answers(survey: &Survey, user_id: UserId, answers: &Answers) -> Self {
        let collected = survey
            .questions()
            .filter_map(|q| {
                let expectation = answers.dimension(&q.id, Dimension::Expectation)?;
                let reality = answers.dimension(&q.id, Dimension::Reality)?;
                Some(QuestionAnswer {
                    question_id: q.id.clone(),
                    expectation,
                    reality,
                })
            })
            .collect();

        Self::new(survey.id.clone(), user_id, collected)
    }

    pub fn answer(&self, question_id: &QuestionId) -> Option<&QuestionAnswer> {
        self.answers.iter().find(|a| &a.question_id == question_id)
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::answers::answer_key;
    use crate::domain::survey::definition::fixtures::small_survey;
    use crate::domain::survey::SurveyKind;

    fn q(id: &str) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    #[test]
    fn from_answers_collects_complete_questions_only() {
        let survey = small_survey("1", SurveyKind::Family);
        let mut answers = Answers::new();
        answers.set(answer_key(&q("q1"), Dimension::Expectation), 4.5);
        answers.set(answer_key(&q("q1"), Dimension::Reality), 3.5);
        answers.set(answer_key(&q("q2"), Dimension::Expectation), 4.0);
        answers.set("unrelated", 1.0);

        let response = SurveyResponse::from_answers(&survey, UserId::new("1").unwrap(), &answers);

        assert_eq!(response.survey_id.as_str(), "1");
        assert_eq!(response.answers.len(), 1);
        let a = response.answer(&q("q1")).unwrap();
        assert_eq!(a.expectation.value(), 4.5);
        assert!((a.gap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn question_answer_clamps_scores() {
        let a = QuestionAnswer::new(q("q1"), 8.0, -2.0);
        assert_eq!(a.expectation.value(), 5.0);
        assert_eq!(a.reality.value(), 0.0);
    }

    #[test]
    fn response_round_trips_camel_case() {
        let response = SurveyResponse::new(
            SurveyId::new("2").unwrap(),
            UserId::new("1").unwrap(),
            vec![QuestionAnswer::new(q("c1"), 4.0, 3.0)],
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["surveyId"], "2");
        assert_eq!(json["answers"][0]["questionId"], "c1");
        let back: SurveyResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back, response);
    }
}
