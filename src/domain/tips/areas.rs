//! Improvement areas: survey items ranked by the user's own gaps.

use serde::Serialize;

use super::action_type::ActionType;
use super::catalog::TipsCatalog;
use crate::domain::foundation::QuestionId;
use crate::domain::results::GapLevel;
use crate::domain::survey::{Survey, SurveyResponse};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSummary {
    pub action_type: ActionType,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaItem {
    pub question_id: QuestionId,
    pub name: String,
    pub text: String,
    pub gap: f64,
    pub level: GapLevel,
    pub actions: Vec<ActionSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSubcategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub items: Vec<AreaItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub gap: f64,
    pub level: GapLevel,
    pub subcategories: Vec<AreaSubcategory>,
}

/// Groups the answered questions of `response` into categories.
///
/// Items within a subcategory are ordered by gap, largest first. A
/// category's gap is the mean of its item gaps. Unanswered questions and
/// empty groups are left out.
pub fn improvement_areas(
    survey: &Survey,
    response: &SurveyResponse,
    tips: &TipsCatalog,
) -> Vec<AreaCategory> {
    survey
        .pages
        .iter()
        .filter_map(|page| {
            let subcategories: Vec<AreaSubcategory> = page
                .subcategories
                .iter()
                .filter_map(|sub| {
                    let mut items: Vec<AreaItem> = sub
                        .questions
                        .iter()
                        .filter_map(|q| {
                            let answer = response.answer(&q.id)?;
                            let gap = answer.gap();
                            Some(AreaItem {
                                question_id: q.id.clone(),
                                name: q.item.clone(),
                                text: q.text.clone(),
                                gap,
                                level: GapLevel::from_gap(gap),
                                actions: actions_for(tips, &q.item),
                            })
                        })
                        .collect();
                    if items.is_empty() {
                        return None;
                    }
                    items.sort_by(|a, b| b.gap.total_cmp(&a.gap));
                    Some(AreaSubcategory {
                        id: sub.id.clone(),
                        name: sub.name.clone(),
                        description: sub.description.clone(),
                        items,
                    })
                })
                .collect();

            let gaps = subcategories
                .iter()
                .flat_map(|s| s.items.iter())
                .map(|i| i.gap)
                .collect::<Vec<_>>();
            if gaps.is_empty() {
                return None;
            }
            let gap = gaps.iter().sum::<f64>() / gaps.len() as f64;

            Some(AreaCategory {
                id: page.category_id.clone(),
                name: page.title.clone(),
                description: page.description.clone(),
                gap,
                level: GapLevel::from_gap(gap),
                subcategories,
            })
        })
        .collect()
}

fn actions_for(tips: &TipsCatalog, item: &str) -> Vec<ActionSummary> {
    ActionType::ALL
        .into_iter()
        .filter_map(|action_type| {
            let name = tips.action_name(item, action_type);
            (!name.is_empty()).then(|| ActionSummary {
                action_type,
                name: name.to_string(),
            })
        })
        .collect()
}

/// Item with the largest gap across all areas, if any.
pub fn top_item(areas: &[AreaCategory]) -> Option<&AreaItem> {
    areas
        .iter()
        .flat_map(|c| c.subcategories.iter())
        .flat_map(|s| s.items.iter())
        .max_by(|a, b| a.gap.total_cmp(&b.gap))
}
