//! Aggregation of submitted responses into comparisons.
//!
//! Every survey page is one category. Category scores are plain means
//! over the questions answered on that page.

use super::comparison::{
    CategoryDetail, PartnerScores, QuestionComparison, ResultComparison, SubcategoryDetail,
    SurveyResults,
};
use crate::domain::foundation::{Score, SurveyId};
use crate::domain::survey::{QuestionAnswer, Survey, SurveyPage, SurveyResponse};

const DEMO_PARTNER_EXPECTATION_OFFSET: f64 = 0.3;
const DEMO_PARTNER_REALITY_OFFSET: f64 = 0.2;

/// Builds comparisons and question details for `response`, paired with
/// `partner` when given.
pub fn compare(
    survey: &Survey,
    response: &SurveyResponse,
    partner: Option<&SurveyResponse>,
) -> SurveyResults {
    let mut results = SurveyResults::empty(survey.id.clone());

    for page in &survey.pages {
        let Some((expectation, reality)) = page_means(page, response) else {
            continue;
        };

        let mut comparison =
            ResultComparison::new(page.category_id.as_str(), page.title.as_str(), expectation, reality);
        if let Some((pe, pr)) = partner.and_then(|p| page_means(page, p)) {
            comparison = comparison.with_partner(PartnerScores::new(pe, pr));
        }
        results.comparisons.push(comparison);
        results.details.push(page_detail(page, response, partner));
    }

    results
}

fn page_answers<'a>(
    page: &'a SurveyPage,
    response: &'a SurveyResponse,
) -> impl Iterator<Item = &'a QuestionAnswer> + 'a {
    page.questions().filter_map(move |q| response.answer(&q.id))
}

fn page_means(page: &SurveyPage, response: &SurveyResponse) -> Option<(Score, Score)> {
    let expectation = Score::mean(page_answers(page, response).map(|a| a.expectation))?;
    let reality = Score::mean(page_answers(page, response).map(|a| a.reality))?;
    Some((expectation, reality))
}

fn page_detail(
    page: &SurveyPage,
    response: &SurveyResponse,
    partner: Option<&SurveyResponse>,
) -> CategoryDetail {
    let subcategories = page
        .subcategories
        .iter()
        .filter_map(|sub| {
            let questions: Vec<QuestionComparison> = sub
                .questions
                .iter()
                .filter_map(|q| {
                    let answer = response.answer(&q.id)?;
                    let partner = partner
                        .and_then(|p| p.answer(&q.id))
                        .map(|p| PartnerScores::new(p.expectation, p.reality));
                    Some(QuestionComparison {
                        question_id: q.id.clone(),
                        item: q.item.clone(),
                        text: q.text.clone(),
                        expectation: answer.expectation,
                        reality: answer.reality,
                        gap: answer.gap(),
                        partner,
                    })
                })
                .collect();

            if questions.is_empty() {
                None
            } else {
                Some(SubcategoryDetail {
                    id: sub.id.clone(),
                    name: sub.name.clone(),
                    questions,
                })
            }
        })
        .collect();

    CategoryDetail {
        category_id: page.category_id.clone(),
        name: page.title.clone(),
        subcategories,
    }
}

/// Most recent response for `survey_id`, if any.
///
/// Responses are append-only so the last match is the latest.
pub fn latest_for<'a>(
    responses: &'a [SurveyResponse],
    survey_id: &SurveyId,
) -> Option<&'a SurveyResponse> {
    responses.iter().rev().find(|r| &r.survey_id == survey_id)
}

/// Comparisons ordered by gap, largest first.
pub fn rank_by_gap(comparisons: &[ResultComparison]) -> Vec<ResultComparison> {
    let mut ranked = comparisons.to_vec();
    ranked.sort_by(|a, b| b.gap.total_cmp(&a.gap));
    ranked
}

fn demo_partner(expectation: Score, reality: Score) -> PartnerScores {
    PartnerScores::new(
        Score::new(expectation.value() - DEMO_PARTNER_EXPECTATION_OFFSET),
        Score::new(reality.value() - DEMO_PARTNER_REALITY_OFFSET),
    )
}

/// Fills missing partner scores with values derived from the user's own.
pub fn with_demo_partner(mut results: SurveyResults) -> SurveyResults {
    for comparison in &mut results.comparisons {
        if comparison.partner.is_none() {
            comparison.partner = Some(demo_partner(
                comparison.expectation_score,
                comparison.reality_score,
            ));
        }
    }
    for question in results
        .details
        .iter_mut()
        .flat_map(|c| c.subcategories.iter_mut())
        .flat_map(|s| s.questions.iter_mut())
    {
        if question.partner.is_none() {
            question.partner = Some(demo_partner(question.expectation, question.reality));
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{QuestionId, UserId};
    use crate::domain::survey::definition::fixtures::small_survey;
    use crate::domain::survey::SurveyKind;

    fn response(survey: &Survey, user: &str, answers: &[(&str, f64, f64)]) -> SurveyResponse {
        SurveyResponse::new(
            survey.id.clone(),
            UserId::new(user).unwrap(),
            answers
                .iter()
                .map(|(q, e, r)| QuestionAnswer::new(QuestionId::new(*q).unwrap(), *e, *r))
                .collect(),
        )
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn compare_averages_each_page() {
        let survey = small_survey("1", SurveyKind::Family);
        let mine = response(&survey, "1", &[("q1", 5.0, 3.0), ("q2", 4.0, 4.0), ("q3", 3.0, 1.0)]);

        let results = compare(&survey, &mine, None);

        assert_eq!(results.survey_id.as_str(), "1");
        assert_eq!(results.comparisons.len(), 2);
        let emotional = &results.comparisons[0];
        assert_eq!(emotional.category_id, "emotional");
        assert_eq!(emotional.category_name, "感情・コミュニケーション");
        assert!(close(emotional.expectation_score.value(), 4.5));
        assert!(close(emotional.reality_score.value(), 3.5));
        assert!(close(emotional.gap, 1.0));
        assert!(emotional.partner.is_none());
    }

    #[test]
    fn compare_skips_unanswered_pages() {
        let survey = small_survey("1", SurveyKind::Family);
        let mine = response(&survey, "1", &[("q3", 4.0, 2.0)]);

        let results = compare(&survey, &mine, None);

        assert_eq!(results.comparisons.len(), 1);
        assert_eq!(results.comparisons[0].category_id, "cooperation");
        assert_eq!(results.details.len(), 1);
        assert_eq!(results.details[0].subcategories[0].questions[0].item, "相互サポート");
    }

    #[test]
    fn compare_pairs_partner_scores() {
        let survey = small_survey("1", SurveyKind::Family);
        let mine = response(&survey, "1", &[("q1", 5.0, 3.0)]);
        let theirs = response(&survey, "2", &[("q1", 4.0, 4.0)]);

        let results = compare(&survey, &mine, Some(&theirs));

        let partner = results.comparisons[0].partner.unwrap();
        assert!(close(partner.expectation_score.value(), 4.0));
        assert!(close(partner.gap, 0.0));
        assert!(results.has_partner_results());
        let question = &results.details[0].subcategories[0].questions[0];
        assert!(question.partner.is_some());
    }

    #[test]
    fn rank_by_gap_orders_descending() {
        let comparisons = vec![
            ResultComparison::new("a", "A", Score::new(3.0), Score::new(2.5)),
            ResultComparison::new("b", "B", Score::new(5.0), Score::new(2.0)),
            ResultComparison::new("c", "C", Score::new(4.0), Score::new(3.0)),
        ];

        let ranked: Vec<_> = rank_by_gap(&comparisons)
            .into_iter()
            .map(|c| c.category_id)
            .collect();

        assert_eq!(ranked, vec!["b", "c", "a"]);
    }

    #[test]
    fn latest_for_picks_last_matching_response() {
        let survey = small_survey("1", SurveyKind::Family);
        let other = small_survey("2", SurveyKind::Couple);
        let responses = vec![
            response(&survey, "2", &[("q1", 1.0, 1.0)]),
            response(&survey, "2", &[("q1", 2.0, 2.0)]),
            response(&other, "2", &[("q1", 3.0, 3.0)]),
        ];

        let latest = latest_for(&responses, &survey.id).unwrap();
        assert_eq!(latest.answers[0].expectation.value(), 2.0);
        assert!(latest_for(&responses, &SurveyId::new("9").unwrap()).is_none());
    }

    #[test]
    fn demo_partner_offsets_scores() {
        let survey = small_survey("1", SurveyKind::Family);
        let mine = response(&survey, "1", &[("q1", 4.0, 3.0)]);

        let results = with_demo_partner(compare(&survey, &mine, None));

        let partner = results.comparisons[0].partner.unwrap();
        assert!(close(partner.expectation_score.value(), 3.7));
        assert!(close(partner.reality_score.value(), 2.8));
        assert!(close(partner.gap, 0.9));
    }

    #[test]
    fn demo_partner_floors_at_zero_and_keeps_real_partner() {
        let survey = small_survey("1", SurveyKind::Family);
        let mine = response(&survey, "1", &[("q1", 0.1, 0.0), ("q3", 4.0, 4.0)]);
        let theirs = response(&survey, "2", &[("q3", 1.0, 1.0)]);

        let results = with_demo_partner(compare(&survey, &mine, Some(&theirs)));

        let demo = results.comparisons[0].partner.unwrap();
        assert_eq!(demo.expectation_score.value(), 0.0);
        assert_eq!(demo.reality_score.value(), 0.0);
        let real = results.comparisons[1].partner.unwrap();
        assert_eq!(real.expectation_score.value(), 1.0);
    }
}
