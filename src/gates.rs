use serde::{Deserialize, Serialize};

use crate::config::{Gate, GateRule};
use crate::domain::Candidate;

/// Outcome of running a candidate through the ordered gate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateCheck {
    pub failure: Option<GateFailure>,
}

impl GateCheck {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// First failing gate, captured as the rejection reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateFailure {
    pub gate: String,
    pub detail: String,
}

/// Evaluate gates strictly in configuration order, stopping at the first
/// failure. A missing attribute fails the gate that references it rather
/// than aborting the evaluation; NaN values fail their comparison the same
/// way.
pub(crate) fn evaluate_gates(candidate: &Candidate, gates: &[Gate]) -> GateCheck {
    for gate in gates {
        if let Some(detail) = check_rule(candidate, &gate.rule) {
            return GateCheck {
                failure: Some(GateFailure {
                    gate: gate.name.clone(),
                    detail,
                }),
            };
        }
    }

    GateCheck { failure: None }
}

fn check_rule(candidate: &Candidate, rule: &GateRule) -> Option<String> {
    match rule {
        GateRule::AtLeast { attribute, min } => match candidate.attribute(attribute) {
            None => Some(missing(attribute)),
            Some(value) if value >= *min => None,
            Some(value) => Some(format!("{attribute} {value} is below required {min}")),
        },
        GateRule::AtMost { attribute, max } => match candidate.attribute(attribute) {
            None => Some(missing(attribute)),
            Some(value) if value <= *max => None,
            Some(value) => Some(format!("{attribute} {value} exceeds allowed {max}")),
        },
        GateRule::Between {
            attribute,
            min,
            max,
        } => match candidate.attribute(attribute) {
            None => Some(missing(attribute)),
            Some(value) if value >= *min && value <= *max => None,
            Some(value) => Some(format!("{attribute} {value} is outside [{min}, {max}]")),
        },
        GateRule::RatioAtMost {
            numerator,
            denominator,
            max,
        } => {
            let num = match candidate.attribute(numerator) {
                Some(value) => value,
                None => return Some(missing(numerator)),
            };
            let den = match candidate.attribute(denominator) {
                Some(value) => value,
                None => return Some(missing(denominator)),
            };
            let ratio = num / den;
            if ratio <= *max {
                None
            } else {
                Some(format!(
                    "{numerator}/{denominator} ratio {ratio:.2} exceeds allowed {max}"
                ))
            }
        }
    }
}

fn missing(attribute: &str) -> String {
    format!("required attribute `{attribute}` is missing")
}
