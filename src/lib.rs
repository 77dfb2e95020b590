//! Gated weighted-scoring decision engine.
//!
//! Candidates pass through an ordered list of hard eligibility gates first;
//! survivors are scored by normalizing each configured criterion into the
//! unit interval and combining the results as a weighted average. The
//! aggregate score is then mapped to a final outcome: a pass/fail threshold
//! or a priced output that decreases as the score improves. Batches of
//! candidates are evaluated independently and ranked deterministically.
//!
//! The engine consumes fully-typed [`Candidate`] and [`EngineConfig`]
//! values and performs no parsing, I/O, or persistence. Configurations are
//! validated eagerly and frozen at construction, so every evaluation is a
//! pure, bounded computation over read-only inputs.

mod aggregate;
mod config;
mod domain;
mod engine;
mod error;
mod gates;
mod normalize;
mod policy;
mod report;

#[cfg(test)]
mod tests;

pub use config::{Criterion, EngineConfig, Gate, GateRule, MappingPolicy};
pub use domain::{Candidate, CandidateId, ScoreComponent};
pub use engine::{DecisionEngine, RejectedPlacement};
pub use error::ConfigError;
pub use gates::{GateCheck, GateFailure};
pub use normalize::normalize;
pub use policy::{Decision, Outcome, RejectionReason};
pub use report::{RankingEntry, RankingSummary};
