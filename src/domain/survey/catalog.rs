//! Survey catalog loaded from the bundled YAML asset.

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use super::definition::{Survey, SurveyKind};
use crate::domain::foundation::SurveyId;

const BUNDLED_SURVEYS: &str = include_str!("../../../assets/surveys.yaml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    surveys: Vec<Survey>,
}

/// Read-only list of available surveys.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyCatalog {
    surveys: Vec<Survey>,
}

impl SurveyCatalog {
    /// Loads the catalog shipped with the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml(BUNDLED_SURVEYS)
    }

    /// Parses and validates a catalog document.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_yaml::from_str(source)?;
        Self::new(doc.surveys)
    }

    pub fn new(surveys: Vec<Survey>) -> Result<Self, CatalogError> {
        let mut survey_ids = HashSet::new();
        for survey in &surveys {
            if !survey_ids.insert(survey.id.clone()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate survey id '{}'",
                    survey.id
                )));
            }

            let mut question_ids = HashSet::new();
            for question in survey.questions() {
                if !question_ids.insert(question.id.clone()) {
                    return Err(CatalogError::Invalid(format!(
                        "duplicate question id '{}' in survey '{}'",
                        question.id, survey.id
                    )));
                }
            }

            let mut pages = HashSet::new();
            for page in &survey.pages {
                if !pages.insert(page.number) {
                    return Err(CatalogError::Invalid(format!(
                        "duplicate page {} in survey '{}'",
                        page.number.value(),
                        survey.id
                    )));
                }
            }
        }
        Ok(Self { surveys })
    }

    pub fn surveys(&self) -> &[Survey] {
        &self.surveys
    }

    pub fn get(&self, id: &SurveyId) -> Option<&Survey> {
        self.surveys.iter().find(|s| &s.id == id)
    }

    pub fn by_kind(&self, kind: SurveyKind) -> Option<&Survey> {
        self.surveys.iter().find(|s| s.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.surveys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surveys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PageNumber, QuestionId};

    #[test]
    fn bundled_catalog_has_family_and_couple_surveys() {
        let catalog = SurveyCatalog::bundled().unwrap();
        assert_eq!(catalog.len(), 2);

        let family = catalog.get(&SurveyId::new("1").unwrap()).unwrap();
        assert_eq!(family.title, "夫婦・家族関係診断");
        assert_eq!(family.kind, SurveyKind::Family);
        assert_eq!(family.pages.len(), 4);
        assert_eq!(family.question_count(), 19);

        let couple = catalog.by_kind(SurveyKind::Couple).unwrap();
        assert_eq!(couple.id.as_str(), "2");
        assert_eq!(couple.title, "カップル関係診断");
    }

    #[test]
    fn bundled_page_titles_follow_categories() {
        let catalog = SurveyCatalog::bundled().unwrap();
        let family = catalog.by_kind(SurveyKind::Family).unwrap();
        let titles: Vec<_> = family.pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["感情・コミュニケーション", "協力・衝突解決", "価値観・社会的つながり", "親密感・子育て"]
        );
        assert_eq!(family.page(PageNumber::LAST).unwrap().category_id, "intimacy");
    }

    #[test]
    fn bundled_questions_reference_items() {
        let catalog = SurveyCatalog::bundled().unwrap();
        let family = catalog.by_kind(SurveyKind::Family).unwrap();
        let q1 = family.locate(&QuestionId::new("q1").unwrap()).unwrap();
        assert_eq!(q1.question.item, "共感理解");
    }

    #[test]
    fn unknown_survey_is_none() {
        let catalog = SurveyCatalog::bundled().unwrap();
        assert!(catalog.get(&SurveyId::new("99").unwrap()).is_none());
    }

    #[test]
    fn duplicate_question_ids_are_rejected() {
        let yaml = r#"
surveys:
  - id: "1"
    title: t
    kind: family
    pages:
      - number: 1
        category_id: c
        title: p
        subcategories:
          - id: s
            name: s
            questions:
              - { id: q1, item: a, text: x }
              - { id: q1, item: b, text: y }
"#;
        assert!(matches!(
            SurveyCatalog::from_yaml(yaml),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(
            SurveyCatalog::from_yaml("surveys: [ {id: }"),
            Err(CatalogError::Parse(_))
        ));
    }
}
