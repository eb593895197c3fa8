//! Survey definition: pages, subcategories, and questions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PageNumber, QuestionId, SurveyId};

/// Which relationship the survey assesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyKind {
    Family,
    Couple,
}

/// A single statement rated on both the expectation and reality scales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// Improvement item this question measures (key into the tips table).
    pub item: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
}

/// One page of a survey; each page covers one relationship category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyPage {
    pub number: PageNumber,
    pub category_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub subcategories: Vec<Subcategory>,
}

impl SurveyPage {
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.subcategories.iter().flat_map(|s| s.questions.iter())
    }
}

/// Where a question sits inside a survey.
#[derive(Debug, Clone, Copy)]
pub struct QuestionLocation<'a> {
    pub page: &'a SurveyPage,
    pub subcategory: &'a Subcategory,
    pub question: &'a Question,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    pub id: SurveyId,
    pub title: String,
    pub kind: SurveyKind,
    #[serde(default)]
    pub description: String,
    pub pages: Vec<SurveyPage>,
}

impl Survey {
    pub fn page(&self, number: PageNumber) -> Option<&SurveyPage> {
        self.pages.iter().find(|p| p.number == number)
    }

    /// All question locations in page order.
    pub fn locations(&self) -> impl Iterator<Item = QuestionLocation<'_>> {
        self.pages.iter().flat_map(|page| {
            page.subcategories.iter().flat_map(move |subcategory| {
                subcategory.questions.iter().map(move |question| QuestionLocation {
                    page,
                    subcategory,
                    question,
                })
            })
        })
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.pages.iter().flat_map(|p| p.questions())
    }

    pub fn locate(&self, question_id: &QuestionId) -> Option<QuestionLocation<'_>> {
        self.locations().find(|l| &l.question.id == question_id)
    }

    pub fn question_count(&self) -> usize {
        self.questions().count()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::small_survey;
    use super::*;

    #[test]
    fn locate_finds_page_and_subcategory() {
        let survey = small_survey("1", SurveyKind::Family);
        let location = survey.locate(&QuestionId::new("q3").unwrap()).unwrap();
        assert_eq!(location.page.category_id, "cooperation");
        assert_eq!(location.subcategory.id, "cooperation-support");
        assert_eq!(location.question.item, "相互サポート");
    }

    #[test]
    fn locate_unknown_question_is_none() {
        let survey = small_survey("1", SurveyKind::Family);
        assert!(survey.locate(&QuestionId::new("q99").unwrap()).is_none());
    }

    #[test]
    fn page_lookup_and_question_count() {
        let survey = small_survey("1", SurveyKind::Family);
        assert_eq!(survey.question_count(), 3);
        assert_eq!(survey.page(PageNumber::clamped(2)).unwrap().title, "協力・衝突解決");
        assert!(survey.page(PageNumber::LAST).is_none());
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SurveyKind::Couple).unwrap(), "\"couple\"");
    }
}
