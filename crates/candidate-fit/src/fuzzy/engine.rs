use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::profile;
use super::registry::{VariableRegistry, DEFAULT_RESOLUTION};
use super::rules::{RuleActivation, RuleBase};
use super::variable::VariableId;
use super::FuzzyError;

/// Crisp inputs consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateSignals {
    pub experience: f64,
    pub skill_match: f64,
    pub education: f64,
    pub cgpa: f64,
    pub projects: u32,
}

impl CandidateSignals {
    pub fn profile_strength(&self) -> f64 {
        profile::aggregate(self.cgpa, self.projects)
    }

    fn crisp(&self, variable: VariableId) -> f64 {
        match variable {
            VariableId::Experience => self.experience,
            VariableId::SkillMatch => self.skill_match,
            VariableId::Education => self.education,
            VariableId::ProfileStrength => self.profile_strength(),
            VariableId::CandidateFit => f64::NAN,
        }
    }
}

/// Whether the aggregated output region carried any mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitOutcome {
    Scored,
    /// Every rule had zero strength; the score is the `0.0` fallback.
    NoRuleFired,
}

impl FitOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            FitOutcome::Scored => "scored",
            FitOutcome::NoRuleFired => "no_rule_fired",
        }
    }
}

/// Full result of one inference, including the per-rule audit trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitInference {
    pub score: f64,
    pub outcome: FitOutcome,
    pub profile_strength: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_label: Option<String>,
    pub activations: Vec<RuleActivation>,
}

/// Mamdani inference over an immutable registry and rule base.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceEngine {
    registry: VariableRegistry,
    rules: RuleBase,
}

impl InferenceEngine {
    pub fn new(registry: VariableRegistry, rules: RuleBase) -> Self {
        Self { registry, rules }
    }

    /// Standard variables and rules, validated once. `resolution` is the output sampling step.
    pub fn standard(resolution: f64) -> Result<Self, FuzzyError> {
        let registry = VariableRegistry::standard(resolution)?;
        let rules = RuleBase::standard(&registry)?;
        Ok(Self::new(registry, rules))
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    pub fn resolution(&self) -> f64 {
        self.registry.output().universe().step()
    }

    pub fn evaluate(&self, signals: &CandidateSignals) -> Result<FitInference, FuzzyError> {
        let profile_strength = signals.profile_strength();

        for variable in VariableId::INPUTS {
            let value = signals.crisp(variable);
            if !self.registry.variable(variable).universe().contains(value) {
                debug!(%variable, value, "input outside nominal universe");
            }
        }

        let activations = self
            .rules
            .fire(|variable, label| {
                self.registry
                    .membership(variable, label, signals.crisp(variable))
            })?;

        let (score, outcome) = self.defuzzify(&activations);
        let dominant_label = self.dominant_label(&activations);

        match outcome {
            FitOutcome::Scored => debug!(
                score,
                profile_strength,
                dominant = dominant_label.as_deref().unwrap_or("-"),
                "candidate fit inferred"
            ),
            FitOutcome::NoRuleFired => warn!(
                experience = signals.experience,
                skill_match = signals.skill_match,
                education = signals.education,
                profile_strength,
                "no fuzzy rule fired; using fallback score"
            ),
        }

        Ok(FitInference {
            score,
            outcome,
            profile_strength,
            dominant_label,
            activations,
        })
    }

    /// Centroid of the aggregated output region, rounded to two decimals.
    ///
    /// Each output label is clipped at the strongest activation targeting it and
    /// the region is the pointwise maximum of the clipped sets. An empty region
    /// yields `(0.0, NoRuleFired)`.
    pub fn defuzzify(&self, activations: &[RuleActivation]) -> (f64, FitOutcome) {
        let output = self.registry.output();
        let clipped: Vec<_> = output
            .labels()
            .filter_map(|label| {
                let set = output.term(label)?;
                Some((set, clip_strength(activations, label)))
            })
            .filter(|(_, clip)| *clip > 0.0)
            .collect();

        let mut weighted = 0.0;
        let mut area = 0.0;
        for y in output.universe().samples() {
            let height = clipped
                .iter()
                .map(|(set, clip)| clip.min(set.degree(y)))
                .fold(0.0, f64::max);
            weighted += y * height;
            area += height;
        }

        if area <= 0.0 {
            return (0.0, FitOutcome::NoRuleFired);
        }

        (round_to_cents(weighted / area), FitOutcome::Scored)
    }

    fn dominant_label(&self, activations: &[RuleActivation]) -> Option<String> {
        let mut best: Option<(&str, f64)> = None;
        for label in self.registry.output().labels() {
            let clip = clip_strength(activations, label);
            if clip > best.map_or(0.0, |(_, strength)| strength) {
                best = Some((label, clip));
            }
        }
        best.map(|(label, _)| label.to_string())
    }
}

fn clip_strength(activations: &[RuleActivation], label: &str) -> f64 {
    activations
        .iter()
        .filter(|activation| activation.consequent == label)
        .map(|activation| activation.strength)
        .fold(0.0, f64::max)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

static STANDARD_ENGINE: OnceLock<InferenceEngine> = OnceLock::new();

/// Process-wide engine at the default resolution, built on first use.
pub fn standard_engine() -> Result<&'static InferenceEngine, FuzzyError> {
    if let Some(engine) = STANDARD_ENGINE.get() {
        return Ok(engine);
    }

    let engine = InferenceEngine::standard(DEFAULT_RESOLUTION)?;
    Ok(STANDARD_ENGINE.get_or_init(|| engine))
}

/// Scores one candidate with the standard engine.
pub fn infer(
    experience: f64,
    skill_match: f64,
    education: f64,
    cgpa: f64,
    projects: u32,
) -> Result<f64, FuzzyError> {
    let signals = CandidateSignals {
        experience,
        skill_match,
        education,
        cgpa,
        projects,
    };
    Ok(standard_engine()?.evaluate(&signals)?.score)
}
