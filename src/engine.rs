#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate;
use crate::config::EngineConfig;
use crate::domain::Candidate;
use crate::error::ConfigError;
use crate::gates::{evaluate_gates, GateCheck};
use crate::policy::{map_outcome, Decision};

/// Where rejected candidates land in a ranked batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectedPlacement {
    /// Drop rejected candidates from the ranking.
    Exclude,
    /// Append rejected candidates after the accepted block, in input order.
    Last,
}

/// Stateless evaluator applying a frozen configuration to candidates.
///
/// The configuration is validated once at construction and never mutated
/// afterwards, so evaluations of distinct candidates are independent and
/// need no synchronization.
pub struct DecisionEngine {
    config: EngineConfig,
}

impl DecisionEngine {
    /// Validate the configuration and freeze it into an engine.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run only the eligibility gates for a candidate, without scoring.
    pub fn check_gates(&self, candidate: &Candidate) -> GateCheck {
        evaluate_gates(candidate, &self.config.gates)
    }

    /// Run one candidate through gates, scoring, and outcome mapping.
    ///
    /// Gate failure is terminal: the decision carries the first failing
    /// gate as its reason and no aggregate score. On gate pass the
    /// candidate is scored and the configured policy maps the score to the
    /// final outcome.
    pub fn evaluate(&self, candidate: &Candidate) -> Decision {
        let check = evaluate_gates(candidate, &self.config.gates);
        if let Some(failure) = check.failure {
            tracing::debug!(
                candidate = %candidate.id.0,
                gate = %failure.gate,
                "candidate rejected at gate"
            );
            return Decision::rejected_at_gate(candidate.id.clone(), failure);
        }

        let (score, components) = aggregate(candidate, &self.config.criteria);
        tracing::debug!(candidate = %candidate.id.0, score, "candidate scored");

        Decision {
            candidate_id: candidate.id.clone(),
            outcome: map_outcome(score, &self.config.policy),
            aggregate_score: Some(score),
            components,
        }
    }

    /// Evaluate a batch independently and order it for ranking.
    ///
    /// No candidate's outcome affects another's. Accepted decisions sort by
    /// aggregate score descending; the sort is stable so equal scores keep
    /// their input order across runs.
    pub fn rank(&self, candidates: &[Candidate], placement: RejectedPlacement) -> Vec<Decision> {
        let mut accepted = Vec::with_capacity(candidates.len());
        let mut rejected = Vec::new();
        for decision in self.evaluate_batch(candidates) {
            if decision.is_accepted() {
                accepted.push(decision);
            } else {
                rejected.push(decision);
            }
        }

        accepted.sort_by(|a, b| {
            let left = a.aggregate_score.unwrap_or(0.0);
            let right = b.aggregate_score.unwrap_or(0.0);
            right
                .partial_cmp(&left)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            accepted = accepted.len(),
            rejected = rejected.len(),
            "batch ranked"
        );

        match placement {
            RejectedPlacement::Exclude => accepted,
            RejectedPlacement::Last => {
                accepted.extend(rejected);
                accepted
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn evaluate_batch(&self, candidates: &[Candidate]) -> Vec<Decision> {
        candidates
            .par_iter()
            .map(|candidate| self.evaluate(candidate))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_batch(&self, candidates: &[Candidate]) -> Vec<Decision> {
        candidates
            .iter()
            .map(|candidate| self.evaluate(candidate))
            .collect()
    }
}
