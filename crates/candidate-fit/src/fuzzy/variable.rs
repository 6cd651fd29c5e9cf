use std::fmt;

use serde::{Deserialize, Serialize};

use super::membership::Triangular;
use super::FuzzyError;

/// Identifies the linguistic variables known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableId {
    Experience,
    SkillMatch,
    Education,
    ProfileStrength,
    CandidateFit,
}

impl VariableId {
    pub const INPUTS: [VariableId; 4] = [
        VariableId::Experience,
        VariableId::SkillMatch,
        VariableId::Education,
        VariableId::ProfileStrength,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VariableId::Experience => "experience",
            VariableId::SkillMatch => "skill_match",
            VariableId::Education => "education",
            VariableId::ProfileStrength => "profile_strength",
            VariableId::CandidateFit => "candidate_fit",
        }
    }

    pub fn is_input(&self) -> bool {
        !matches!(self, VariableId::CandidateFit)
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Upper bound on the number of points a universe may be sampled at.
pub const MAX_SAMPLES: usize = 100_000;

/// Closed numeric interval sampled at a fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Universe {
    min: f64,
    max: f64,
    step: f64,
}

impl Universe {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, FuzzyError> {
        let finite = min.is_finite() && max.is_finite() && step.is_finite();
        if !finite || min >= max || step <= 0.0 || step > max - min {
            return Err(FuzzyError::InvalidUniverse { min, max, step });
        }
        // Keeps `sample_count` bounded for any finite step.
        if (max - min) / step >= MAX_SAMPLES as f64 {
            return Err(FuzzyError::InvalidUniverse { min, max, step });
        }

        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Same bounds, different sampling step.
    pub fn with_step(&self, step: f64) -> Result<Self, FuzzyError> {
        Self::new(self.min, self.max, step)
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Number of sample points, both bounds included when the step divides the width.
    pub fn sample_count(&self) -> usize {
        ((self.max - self.min) / self.step + 1e-9).floor() as usize + 1
    }

    /// Sample points computed as `min + i * step` so no rounding error accumulates.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.sample_count()).map(move |index| self.min + index as f64 * self.step)
    }
}

/// Named fuzzy partition of one universe.
#[derive(Debug, Clone, PartialEq)]
pub struct LinguisticVariable {
    id: VariableId,
    universe: Universe,
    terms: Vec<(String, Triangular)>,
}

impl LinguisticVariable {
    pub fn new(id: VariableId, universe: Universe) -> Self {
        Self {
            id,
            universe,
            terms: Vec::new(),
        }
    }

    /// Adds a labelled set; labels are unique within a variable.
    pub fn with_term(
        mut self,
        label: &str,
        (a, b, c): (f64, f64, f64),
    ) -> Result<Self, FuzzyError> {
        if self.term(label).is_some() {
            return Err(FuzzyError::DuplicateLabel {
                variable: self.id,
                label: label.to_string(),
            });
        }

        let set = Triangular::new(a, b, c)?;
        self.terms.push((label.to_string(), set));
        Ok(self)
    }

    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(label, _)| label.as_str())
    }

    pub fn term(&self, label: &str) -> Option<&Triangular> {
        self.terms
            .iter()
            .find(|(candidate, _)| candidate == label)
            .map(|(_, set)| set)
    }

    pub fn membership(&self, label: &str, x: f64) -> Result<f64, FuzzyError> {
        self.term(label)
            .map(|set| set.degree(x))
            .ok_or_else(|| FuzzyError::InvalidLabel {
                variable: self.id,
                label: label.to_string(),
            })
    }

    /// Degrees of every label for one crisp value, in declaration order.
    pub fn fuzzify(&self, x: f64) -> Vec<(String, f64)> {
        self.terms
            .iter()
            .map(|(label, set)| (label.clone(), set.degree(x)))
            .collect()
    }
}
