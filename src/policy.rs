use serde::{Deserialize, Serialize};

use crate::config::MappingPolicy;
use crate::domain::{CandidateId, ScoreComponent};
use crate::gates::GateFailure;

/// Terminal outcome for an evaluated candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Candidate passed gates and the mapping policy. `derived_output`
    /// carries the priced value under a pricing policy and is absent under
    /// a plain threshold.
    Accepted { derived_output: Option<f64> },
    Rejected(RejectionReason),
}

/// Why a candidate was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// A hard eligibility gate failed; scoring never ran.
    GateFailed { gate: String, detail: String },
    /// Gates passed but the aggregate score missed the threshold policy.
    BelowThreshold { min_score: f64, score: f64 },
}

impl RejectionReason {
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::GateFailed { gate, detail } => {
                format!("rejected by gate `{gate}`: {detail}")
            }
            RejectionReason::BelowThreshold { min_score, score } => {
                format!("score {score:.4} below required minimum {min_score:.4}")
            }
        }
    }
}

/// Evaluation output: the outcome plus the score trail that produced it.
///
/// `aggregate_score` is present exactly when gates passed; a threshold
/// rejection therefore still carries the score it was judged on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub candidate_id: CandidateId,
    pub outcome: Outcome,
    pub aggregate_score: Option<f64>,
    pub components: Vec<ScoreComponent>,
}

impl Decision {
    pub(crate) fn rejected_at_gate(candidate_id: CandidateId, failure: GateFailure) -> Self {
        Self {
            candidate_id,
            outcome: Outcome::Rejected(RejectionReason::GateFailed {
                gate: failure.gate,
                detail: failure.detail,
            }),
            aggregate_score: None,
            components: Vec::new(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, Outcome::Accepted { .. })
    }

    /// Rejection reason text; `None` for accepted candidates.
    pub fn reason(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Rejected(reason) => Some(reason.summary()),
            Outcome::Accepted { .. } => None,
        }
    }

    /// Priced output for candidates accepted under a pricing policy.
    pub fn derived_output(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Accepted { derived_output } => derived_output,
            Outcome::Rejected(_) => None,
        }
    }
}

/// Translate an aggregate score into the configured outcome.
///
/// Equal scores always produce equal outputs, and the pricing mapping is
/// strictly decreasing so a better score prices lower.
pub(crate) fn map_outcome(score: f64, policy: &MappingPolicy) -> Outcome {
    match *policy {
        MappingPolicy::Threshold { min_score } => {
            if score >= min_score {
                Outcome::Accepted {
                    derived_output: None,
                }
            } else {
                Outcome::Rejected(RejectionReason::BelowThreshold { min_score, score })
            }
        }
        MappingPolicy::LinearPrice { base_value, scale } => Outcome::Accepted {
            derived_output: Some(base_value + (1.0 - score) * scale),
        },
    }
}
