use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A weighted, range-bound feature contributing to the aggregate score.
///
/// `min == max` is a legal degenerate range and behaves as a single
/// pass/fail threshold rather than a continuum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
    pub min: f64,
    pub max: f64,
}

impl Criterion {
    pub fn new(name: impl Into<String>, weight: f64, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            min,
            max,
        }
    }
}

/// Predicate forms a gate can take over candidate attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateRule {
    /// Attribute must be at least `min`.
    AtLeast { attribute: String, min: f64 },
    /// Attribute must be at most `max`.
    AtMost { attribute: String, max: f64 },
    /// Attribute must fall within `[min, max]` inclusive.
    Between {
        attribute: String,
        min: f64,
        max: f64,
    },
    /// Ratio of two attributes must not exceed `max`.
    RatioAtMost {
        numerator: String,
        denominator: String,
        max: f64,
    },
}

/// A named hard eligibility rule evaluated before scoring.
///
/// Gates run strictly in configuration order and the first failure is the
/// one surfaced as the rejection reason, so callers control which reason
/// wins by ordering the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub name: String,
    pub rule: GateRule,
}

impl Gate {
    pub fn new(name: impl Into<String>, rule: GateRule) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }
}

/// How an aggregate score translates into the final outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingPolicy {
    /// Accept when the aggregate score reaches `min_score`, reject otherwise.
    Threshold { min_score: f64 },
    /// Price the outcome as `base_value + (1 - score) * scale`, a strictly
    /// decreasing function of the score.
    LinearPrice { base_value: f64, scale: f64 },
}

/// Immutable engine configuration: scoring criteria, ordered gates, and the
/// outcome mapping policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub criteria: Vec<Criterion>,
    pub gates: Vec<Gate>,
    pub policy: MappingPolicy,
}

impl EngineConfig {
    pub fn new(policy: MappingPolicy) -> Self {
        Self {
            criteria: Vec::new(),
            gates: Vec::new(),
            policy,
        }
    }

    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn with_gate(mut self, gate: Gate) -> Self {
        self.gates.push(gate);
        self
    }

    /// Reject malformed configurations before any candidate is evaluated.
    ///
    /// Criterion names must be unique, weights finite and non-negative with
    /// a positive total, ranges ordered, and policy constants finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.criteria.is_empty() {
            return Err(ConfigError::EmptyCriteria);
        }

        let mut seen = BTreeSet::new();
        let mut total_weight = 0.0;
        for criterion in &self.criteria {
            if !criterion.weight.is_finite() || criterion.weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    criterion: criterion.name.clone(),
                    weight: criterion.weight,
                });
            }
            if !criterion.min.is_finite()
                || !criterion.max.is_finite()
                || criterion.max < criterion.min
            {
                return Err(ConfigError::InvalidRange {
                    criterion: criterion.name.clone(),
                    min: criterion.min,
                    max: criterion.max,
                });
            }
            if !seen.insert(criterion.name.as_str()) {
                return Err(ConfigError::DuplicateCriterion {
                    criterion: criterion.name.clone(),
                });
            }
            total_weight += criterion.weight;
        }

        if total_weight <= 0.0 {
            return Err(ConfigError::NonPositiveTotalWeight {
                total: total_weight,
            });
        }

        match self.policy {
            MappingPolicy::Threshold { min_score } => {
                if !min_score.is_finite() || !(0.0..=1.0).contains(&min_score) {
                    return Err(ConfigError::InvalidPolicyConstant {
                        constant: "min_score",
                        value: min_score,
                    });
                }
            }
            MappingPolicy::LinearPrice { base_value, scale } => {
                if !base_value.is_finite() {
                    return Err(ConfigError::InvalidPolicyConstant {
                        constant: "base_value",
                        value: base_value,
                    });
                }
                if !scale.is_finite() || scale <= 0.0 {
                    return Err(ConfigError::InvalidPolicyConstant {
                        constant: "scale",
                        value: scale,
                    });
                }
            }
        }

        Ok(())
    }
}
