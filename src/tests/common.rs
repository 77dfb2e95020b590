use crate::{
    Candidate, Criterion, DecisionEngine, EngineConfig, Gate, GateRule, MappingPolicy,
};

/// Loan-underwriting configuration: age, credit, and debt-ratio gates ahead
/// of a credit/employment/income rubric priced as an interest rate.
pub(super) fn underwriting_config() -> EngineConfig {
    EngineConfig::new(MappingPolicy::LinearPrice {
        base_value: 5.0,
        scale: 10.0,
    })
    .with_criterion(Criterion::new("credit_score", 0.4, 0.0, 850.0))
    .with_criterion(Criterion::new("employment_years", 0.3, 0.0, 10.0))
    .with_criterion(Criterion::new("annual_income", 0.3, 0.0, 100_000.0))
    .with_gate(Gate::new(
        "age_window",
        GateRule::Between {
            attribute: "age".to_string(),
            min: 18.0,
            max: 65.0,
        },
    ))
    .with_gate(Gate::new(
        "minimum_credit",
        GateRule::AtLeast {
            attribute: "credit_score".to_string(),
            min: 650.0,
        },
    ))
    .with_gate(Gate::new(
        "debt_to_income",
        GateRule::RatioAtMost {
            numerator: "monthly_payment".to_string(),
            denominator: "monthly_income".to_string(),
            max: 0.3,
        },
    ))
}

/// Applicant snapshot with the payment figures a 36-month term implies.
pub(super) fn applicant(
    name: &str,
    age: f64,
    annual_income: f64,
    credit_score: f64,
    employment_years: f64,
    loan_amount: f64,
) -> Candidate {
    Candidate::new(name)
        .with_attribute("age", age)
        .with_attribute("annual_income", annual_income)
        .with_attribute("credit_score", credit_score)
        .with_attribute("employment_years", employment_years)
        .with_attribute("monthly_payment", loan_amount / 36.0)
        .with_attribute("monthly_income", annual_income / 12.0)
}

/// Two-criterion configuration used by the credit/income scenarios, with a
/// pass/fail threshold instead of pricing.
pub(super) fn scoring_config() -> EngineConfig {
    EngineConfig::new(MappingPolicy::Threshold { min_score: 0.5 })
        .with_criterion(Criterion::new("credit", 0.4, 0.0, 850.0))
        .with_criterion(Criterion::new("income", 0.6, 0.0, 100_000.0))
        .with_gate(Gate::new(
            "minimum_credit",
            GateRule::AtLeast {
                attribute: "credit".to_string(),
                min: 650.0,
            },
        ))
}

/// Gateless hiring rubric: experience, skills, interview.
pub(super) fn hiring_config() -> EngineConfig {
    EngineConfig::new(MappingPolicy::Threshold { min_score: 0.0 })
        .with_criterion(Criterion::new("experience", 3.0, 0.0, 10.0))
        .with_criterion(Criterion::new("skills", 4.0, 0.0, 100.0))
        .with_criterion(Criterion::new("interview", 3.0, 0.0, 10.0))
}

pub(super) fn hiring_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new("alice")
            .with_attribute("experience", 6.0)
            .with_attribute("skills", 85.0)
            .with_attribute("interview", 8.0),
        Candidate::new("bob")
            .with_attribute("experience", 8.0)
            .with_attribute("skills", 70.0)
            .with_attribute("interview", 7.0),
        Candidate::new("carol")
            .with_attribute("experience", 4.0)
            .with_attribute("skills", 95.0)
            .with_attribute("interview", 9.0),
    ]
}

pub(super) fn engine(config: EngineConfig) -> DecisionEngine {
    DecisionEngine::new(config).expect("fixture configuration is valid")
}
