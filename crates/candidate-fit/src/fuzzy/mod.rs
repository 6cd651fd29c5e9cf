//! Mamdani fuzzy inference for candidate fit scoring.
//!
//! Crisp candidate signals are fuzzified against triangular sets held by the
//! [`VariableRegistry`], the [`RuleBase`] combines the degrees with min/max
//! operators, and the [`InferenceEngine`] aggregates the clipped output sets and
//! takes their centroid. Registry and rules are immutable once validated, so one
//! engine can be shared across threads without synchronization.

mod engine;
mod membership;
pub mod profile;
mod registry;
mod rules;
mod variable;

#[cfg(test)]
mod tests;

pub use engine::{
    infer, standard_engine, CandidateSignals, FitInference, FitOutcome, InferenceEngine,
};
pub use membership::Triangular;
pub use registry::{VariableRegistry, DEFAULT_RESOLUTION, MIN_RESOLUTION};
pub use rules::{Antecedent, Rule, RuleActivation, RuleBase};
pub use variable::{LinguisticVariable, Universe, VariableId, MAX_SAMPLES};

/// Errors raised while defining or evaluating fuzzy variables and rules.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FuzzyError {
    #[error("label '{label}' is not defined for variable {variable}")]
    InvalidLabel { variable: VariableId, label: String },
    #[error("label '{label}' is defined twice for variable {variable}")]
    DuplicateLabel { variable: VariableId, label: String },
    #[error("triangular break points ({a}, {b}, {c}) must be finite and ordered a <= b <= c")]
    InvalidMembership { a: f64, b: f64, c: f64 },
    #[error("universe [{min}, {max}] with step {step} is not a valid sampling grid")]
    InvalidUniverse { min: f64, max: f64, step: f64 },
    #[error("variable {0} is defined more than once")]
    DuplicateVariable(VariableId),
    #[error("variable {0} is missing from the registry")]
    MissingVariable(VariableId),
    #[error("rule {rule} references the output variable in its antecedent")]
    OutputInAntecedent { rule: u8 },
}
