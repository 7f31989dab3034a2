use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::assessments::catalog::inventory;
use crate::assessments::domain::{Profile, RiskDomain, RiskLevel};
use crate::assessments::profiles;
use crate::assessments::scoring::{
    self, ChoiceResponses, DomainScore, LiteracyScore, ScaleResponses,
};

use super::archive::ArchivedSession;
use super::flow::SessionId;

/// Finalized investor-profile result: the answers, the summed score and the
/// tolerance band they landed in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestorReport {
    pub responses: ChoiceResponses,
    pub score: u16,
    pub profile: Profile,
}

impl InvestorReport {
    pub fn from_responses(responses: &ChoiceResponses) -> Self {
        let score = scoring::investor_score(responses);
        Self {
            responses: responses.clone(),
            score,
            profile: profiles::investor_profile(score),
        }
    }
}

/// Finalized financial-literacy result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiteracyReport {
    pub responses: ChoiceResponses,
    pub score: LiteracyScore,
    pub profile: Profile,
}

impl LiteracyReport {
    pub fn from_responses(responses: &ChoiceResponses) -> Self {
        let score = scoring::literacy_score(responses);
        Self {
            responses: responses.clone(),
            score,
            profile: profiles::literacy_profile(score.total),
        }
    }
}

/// Finalized risk-taking result: raw answers plus per-domain averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub responses: ScaleResponses,
    pub domains: BTreeMap<RiskDomain, DomainScore>,
}

impl RiskReport {
    pub fn from_responses(responses: &ScaleResponses) -> Self {
        Self {
            responses: responses.clone(),
            domains: scoring::inventory_scores(responses),
        }
    }
}

/// One row of the results screen, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct DomainResultView {
    pub domain: RiskDomain,
    pub key: &'static str,
    pub label: &'static str,
    pub average: f64,
    pub average_label: String,
    pub classification: RiskLevel,
    pub classification_label: &'static str,
    pub interpretation: &'static str,
}

/// Everything the results screen shows, assembled once when the flow reaches
/// it. Scores are carried over from the flow controller, never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub session_id: SessionId,
    pub investor: Option<InvestorReport>,
    pub literacy: Option<LiteracyReport>,
    pub risk: RiskReport,
    pub completed_at: DateTime<Utc>,
}

impl SessionReport {
    pub fn assemble(
        session_id: SessionId,
        investor: Option<InvestorReport>,
        literacy: Option<LiteracyReport>,
        risk: RiskReport,
    ) -> Self {
        Self {
            session_id,
            investor,
            literacy,
            risk,
            completed_at: Utc::now(),
        }
    }

    /// Domain rows in the fixed display order, averages rounded to one
    /// decimal for presentation only.
    pub fn domain_results(&self) -> Vec<DomainResultView> {
        RiskDomain::results_order()
            .into_iter()
            .filter_map(|domain| {
                self.risk.domains.get(&domain).map(|score| DomainResultView {
                    domain,
                    key: domain.key(),
                    label: domain.label(),
                    average: score.average,
                    average_label: format!("{:.1}", score.average),
                    classification: score.classification,
                    classification_label: score.classification.label(),
                    interpretation: inventory::interpretation(domain, score.classification),
                })
            })
            .collect()
    }

    /// Flattens the report into the archive row shape.
    pub fn to_archive_record(&self) -> ArchivedSession {
        ArchivedSession {
            session_id: self.session_id.to_string(),
            investor_data: serde_json::to_value(&self.investor)
                .unwrap_or(serde_json::Value::Null),
            literacy_data: serde_json::to_value(&self.literacy)
                .unwrap_or(serde_json::Value::Null),
            risk_data: serde_json::to_value(&self.risk).unwrap_or(serde_json::Value::Null),
            completed_at: self.completed_at.to_rfc3339(),
        }
    }
}
