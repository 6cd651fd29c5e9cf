use crate::fuzzy::{CandidateSignals, InferenceEngine, RuleActivation, DEFAULT_RESOLUTION};

pub(super) fn engine() -> InferenceEngine {
    InferenceEngine::standard(DEFAULT_RESOLUTION).expect("standard engine builds")
}

pub(super) fn signals(
    experience: f64,
    skill_match: f64,
    education: f64,
    cgpa: f64,
    projects: u32,
) -> CandidateSignals {
    CandidateSignals {
        experience,
        skill_match,
        education,
        cgpa,
        projects,
    }
}

/// Activations where only `fired` carries strength 1.
pub(super) fn single_activation(engine: &InferenceEngine, fired: u8) -> Vec<RuleActivation> {
    engine
        .rules()
        .rules()
        .iter()
        .map(|rule| RuleActivation {
            rule: rule.number,
            antecedent: rule.antecedent.to_string(),
            consequent: rule.consequent.clone(),
            strength: if rule.number == fired { 1.0 } else { 0.0 },
        })
        .collect()
}

pub(super) fn strength_of(activations: &[RuleActivation], rule: u8) -> f64 {
    activations
        .iter()
        .find(|activation| activation.rule == rule)
        .map(|activation| activation.strength)
        .expect("rule present")
}
