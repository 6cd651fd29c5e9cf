use std::collections::BTreeMap;

use super::variable::{LinguisticVariable, Universe, VariableId};
use super::FuzzyError;

/// Sampling step used for every universe unless configured otherwise.
pub const DEFAULT_RESOLUTION: f64 = 1.0;

/// Finest output step accepted from configuration.
pub const MIN_RESOLUTION: f64 = 0.01;

/// Immutable catalogue of the input and output linguistic variables.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRegistry {
    variables: BTreeMap<VariableId, LinguisticVariable>,
}

impl VariableRegistry {
    /// Builds a registry from explicit definitions. Every variable id must be
    /// present exactly once.
    pub fn new(definitions: Vec<LinguisticVariable>) -> Result<Self, FuzzyError> {
        let mut variables = BTreeMap::new();
        for variable in definitions {
            let id = variable.id();
            if variables.insert(id, variable).is_some() {
                return Err(FuzzyError::DuplicateVariable(id));
            }
        }

        for id in VariableId::INPUTS
            .into_iter()
            .chain(std::iter::once(VariableId::CandidateFit))
        {
            if !variables.contains_key(&id) {
                return Err(FuzzyError::MissingVariable(id));
            }
        }

        Ok(Self { variables })
    }

    /// The candidate fit partition with the output universe sampled at `resolution`.
    pub fn standard(resolution: f64) -> Result<Self, FuzzyError> {
        let experience = LinguisticVariable::new(
            VariableId::Experience,
            Universe::new(0.0, 15.0, DEFAULT_RESOLUTION)?,
        )
        .with_term("None", (0.0, 0.0, 2.0))?
        .with_term("Some", (1.0, 4.0, 7.0))?
        .with_term("Matched", (5.0, 8.0, 11.0))?
        .with_term("Extensive", (9.0, 15.0, 15.0))?;

        let skill_match = LinguisticVariable::new(
            VariableId::SkillMatch,
            Universe::new(0.0, 100.0, DEFAULT_RESOLUTION)?,
        )
        .with_term("Low", (0.0, 0.0, 50.0))?
        .with_term("Medium", (30.0, 65.0, 90.0))?
        .with_term("High", (70.0, 100.0, 100.0))?;

        let education = LinguisticVariable::new(
            VariableId::Education,
            Universe::new(1.0, 5.0, DEFAULT_RESOLUTION)?,
        )
        .with_term("Relevant", (1.0, 3.0, 4.0))?
        .with_term("Advanced", (3.0, 5.0, 5.0))?;

        let profile_strength = LinguisticVariable::new(
            VariableId::ProfileStrength,
            Universe::new(0.0, 10.0, DEFAULT_RESOLUTION)?,
        )
        .with_term("Weak", (0.0, 0.0, 4.0))?
        .with_term("Average", (3.0, 5.0, 7.0))?
        .with_term("Strong", (6.0, 10.0, 10.0))?;

        let candidate_fit = LinguisticVariable::new(
            VariableId::CandidateFit,
            Universe::new(0.0, 100.0, resolution)?,
        )
        .with_term("Poor Fit", (0.0, 0.0, 40.0))?
        .with_term("Possible Fit", (30.0, 55.0, 75.0))?
        .with_term("Good Fit", (65.0, 80.0, 95.0))?
        .with_term("Top Candidate", (85.0, 100.0, 100.0))?;

        Self::new(vec![
            experience,
            skill_match,
            education,
            profile_strength,
            candidate_fit,
        ])
    }

    pub fn variable(&self, id: VariableId) -> &LinguisticVariable {
        // Presence of every id is checked in `new`.
        &self.variables[&id]
    }

    pub fn output(&self) -> &LinguisticVariable {
        self.variable(VariableId::CandidateFit)
    }

    pub fn membership(&self, variable: VariableId, label: &str, x: f64) -> Result<f64, FuzzyError> {
        self.variable(variable).membership(label, x)
    }

    /// Fails with `InvalidLabel` when `label` is not defined for `variable`.
    pub fn ensure_label(&self, variable: VariableId, label: &str) -> Result<(), FuzzyError> {
        match self.variable(variable).term(label) {
            Some(_) => Ok(()),
            None => Err(FuzzyError::InvalidLabel {
                variable,
                label: label.to_string(),
            }),
        }
    }
}
