//! Pure scorers over response maps. Scorers are total: unknown ids and
//! missing answers contribute zero rather than failing, so callers decide
//! separately whether a response set is complete.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::assessments::catalog::{inventory, investor, literacy};
use crate::assessments::domain::{RiskDomain, RiskLevel};
use crate::assessments::profiles;

/// Answers to the choice-based instruments, keyed by question id.
pub type ChoiceResponses = BTreeMap<String, String>;

/// Answers to the risk-taking inventory, keyed by item number.
pub type ScaleResponses = BTreeMap<u8, u8>;

/// Sums the calibrated weight of every recorded investor answer.
pub fn investor_score(responses: &ChoiceResponses) -> u16 {
    responses
        .iter()
        .map(|(question_id, choice)| investor::choice_weight(question_id, choice))
        .sum()
}

/// Breakdown of the financial-literacy total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiteracyScore {
    pub objective: u8,
    pub self_score: u8,
    pub total: u8,
}

/// Grades the objective questions against the answer key and adds the
/// self-rating at face value. A missing or malformed self-rating counts
/// as zero; values above the scale are clamped to five.
pub fn literacy_score(responses: &ChoiceResponses) -> LiteracyScore {
    let objective = literacy::OBJECTIVE_IDS
        .iter()
        .copied()
        .filter(|id| responses.get(*id).map(String::as_str) == literacy::correct_choice(id))
        .count() as u8
        * literacy::OBJECTIVE_POINTS;

    let self_score = responses
        .get(literacy::SELF_ASSESSMENT_ID)
        .and_then(|value| value.parse::<u8>().ok())
        .map(|value| value.min(5))
        .unwrap_or(0);

    LiteracyScore {
        objective,
        self_score,
        total: objective + self_score,
    }
}

/// A domain's mean likelihood and its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DomainScore {
    pub average: f64,
    pub classification: RiskLevel,
}

/// Averages each domain's six items and classifies the result. Unanswered
/// items enter the mean as zero; the divisor is always six.
pub fn inventory_scores(responses: &ScaleResponses) -> BTreeMap<RiskDomain, DomainScore> {
    RiskDomain::ordered()
        .into_iter()
        .map(|domain| {
            let items = inventory::domain_items(domain);
            let sum: u32 = items
                .iter()
                .map(|id| u32::from(responses.get(id).copied().unwrap_or(0)))
                .sum();
            let average = f64::from(sum) / items.len() as f64;
            (
                domain,
                DomainScore {
                    average,
                    classification: profiles::classify_average(average),
                },
            )
        })
        .collect()
}
