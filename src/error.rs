/// Configuration errors detected eagerly, before any candidate is evaluated.
///
/// These are programmer or deployment mistakes: a malformed configuration
/// invalidates every evaluation it would drive, so the engine refuses to
/// construct instead of defaulting to a zero score. Candidate data problems
/// are never raised here; they surface as gate failures on the individual
/// decision.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration declares no scoring criteria")]
    EmptyCriteria,
    #[error("criterion `{criterion}` appears more than once")]
    DuplicateCriterion { criterion: String },
    #[error("criterion `{criterion}` has invalid weight {weight} (must be finite and >= 0)")]
    InvalidWeight { criterion: String, weight: f64 },
    #[error("criterion `{criterion}` has invalid range [{min}, {max}]")]
    InvalidRange { criterion: String, min: f64, max: f64 },
    #[error("total criterion weight must be positive, got {total}")]
    NonPositiveTotalWeight { total: f64 },
    #[error("mapping policy constant `{constant}` is invalid: {value}")]
    InvalidPolicyConstant { constant: &'static str, value: f64 },
}
