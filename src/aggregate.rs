use crate::config::Criterion;
use crate::domain::{Candidate, ScoreComponent};
use crate::normalize::{clamp_unit, normalize};

/// Combine per-criterion normalized values into a single weighted score.
///
/// Criteria are visited in configuration order on every call so the
/// floating-point sum is reproducible. A feature the candidate never
/// supplied scores as worst case for that criterion. The total weight is
/// validated positive before the engine accepts a configuration, and the
/// quotient is clamped so rounding can never push it outside `[0, 1]`.
pub(crate) fn aggregate(
    candidate: &Candidate,
    criteria: &[Criterion],
) -> (f64, Vec<ScoreComponent>) {
    let mut components = Vec::with_capacity(criteria.len());
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for criterion in criteria {
        let raw_value = candidate.attribute(&criterion.name).unwrap_or(f64::NAN);
        let normalized = normalize(raw_value, criterion.min, criterion.max);
        weighted_sum += criterion.weight * normalized;
        total_weight += criterion.weight;
        components.push(ScoreComponent {
            criterion: criterion.name.clone(),
            raw_value,
            weight: criterion.weight,
            normalized,
        });
    }

    (clamp_unit(weighted_sum / total_weight), components)
}
