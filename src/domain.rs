use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for evaluated candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Caller-owned attribute snapshot consumed read-only by the engine.
///
/// Attributes cover both scored features and values referenced only by
/// gates; the two sets may overlap. The ordered map keeps attribute
/// iteration deterministic across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub attributes: BTreeMap<String, f64>,
}

impl Candidate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: CandidateId(id.into()),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: f64) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Raw attribute lookup; `None` when the candidate never supplied it.
    pub fn attribute(&self, name: &str) -> Option<f64> {
        self.attributes.get(name).copied()
    }
}

/// Discrete contribution to an aggregate score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub criterion: String,
    pub raw_value: f64,
    pub weight: f64,
    pub normalized: f64,
}
