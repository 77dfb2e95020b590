use serde::Serialize;

use crate::domain::CandidateId;
use crate::policy::Decision;

/// One accepted candidate's position in a ranked batch.
#[derive(Debug, Clone, Serialize)]
pub struct RankingEntry {
    pub position: usize,
    pub candidate_id: CandidateId,
    pub score_percent: f64,
    pub derived_output: Option<f64>,
}

/// Batch-level view of a ranking run.
#[derive(Debug, Clone, Serialize)]
pub struct RankingSummary {
    pub evaluated: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub entries: Vec<RankingEntry>,
}

impl RankingSummary {
    /// Build a summary from ranked decisions, as returned by
    /// [`DecisionEngine::rank`](crate::DecisionEngine::rank).
    ///
    /// Positions are 1-based over the accepted decisions only; rejected
    /// decisions count toward the totals but produce no entry.
    pub fn from_decisions(decisions: &[Decision]) -> Self {
        let mut entries = Vec::new();
        for decision in decisions {
            if !decision.is_accepted() {
                continue;
            }
            let score = decision.aggregate_score.unwrap_or(0.0);
            entries.push(RankingEntry {
                position: entries.len() + 1,
                candidate_id: decision.candidate_id.clone(),
                score_percent: score * 100.0,
                derived_output: decision.derived_output(),
            });
        }

        Self {
            evaluated: decisions.len(),
            accepted: entries.len(),
            rejected: decisions.len() - entries.len(),
            entries,
        }
    }
}
