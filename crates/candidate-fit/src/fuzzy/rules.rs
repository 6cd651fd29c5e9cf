use std::fmt;

use serde::Serialize;

use super::registry::VariableRegistry;
use super::variable::VariableId;
use super::FuzzyError;

/// Antecedent expression over input fuzzy sets.
#[derive(Debug, Clone, PartialEq)]
pub enum Antecedent {
    Is { variable: VariableId, label: String },
    And(Box<Antecedent>, Box<Antecedent>),
    Or(Box<Antecedent>, Box<Antecedent>),
}

impl Antecedent {
    pub fn is(variable: VariableId, label: &str) -> Self {
        Antecedent::Is {
            variable,
            label: label.to_string(),
        }
    }

    pub fn and(self, other: Antecedent) -> Self {
        Antecedent::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Antecedent) -> Self {
        Antecedent::Or(Box::new(self), Box::new(other))
    }

    /// Firing strength given a lookup of membership degrees. AND is `min`, OR is `max`.
    pub fn strength<F>(&self, degree: &F) -> Result<f64, FuzzyError>
    where
        F: Fn(VariableId, &str) -> Result<f64, FuzzyError>,
    {
        match self {
            Antecedent::Is { variable, label } => degree(*variable, label),
            Antecedent::And(left, right) => Ok(left.strength(degree)?.min(right.strength(degree)?)),
            Antecedent::Or(left, right) => Ok(left.strength(degree)?.max(right.strength(degree)?)),
        }
    }

    fn for_each_reference<'a>(&'a self, visit: &mut impl FnMut(VariableId, &'a str)) {
        match self {
            Antecedent::Is { variable, label } => visit(*variable, label),
            Antecedent::And(left, right) | Antecedent::Or(left, right) => {
                left.for_each_reference(visit);
                right.for_each_reference(visit);
            }
        }
    }
}

impl fmt::Display for Antecedent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Antecedent::Is { variable, label } => write!(f, "{variable}={label}"),
            Antecedent::And(left, right) => write!(f, "({left} AND {right})"),
            Antecedent::Or(left, right) => write!(f, "({left} OR {right})"),
        }
    }
}

/// One implication from an antecedent to a `candidate_fit` label.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub number: u8,
    pub antecedent: Antecedent,
    pub consequent: String,
}

/// Outcome of firing one rule, kept for the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleActivation {
    pub rule: u8,
    pub antecedent: String,
    pub consequent: String,
    pub strength: f64,
}

/// Ordered, validated rule set.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// Checks every referenced label against the registry before accepting the rules.
    pub fn new(rules: Vec<Rule>, registry: &VariableRegistry) -> Result<Self, FuzzyError> {
        for rule in &rules {
            let mut invalid = None;
            rule.antecedent.for_each_reference(&mut |variable, label| {
                if invalid.is_some() {
                    return;
                }
                if !variable.is_input() {
                    invalid = Some(FuzzyError::OutputInAntecedent { rule: rule.number });
                } else if let Err(err) = registry.ensure_label(variable, label) {
                    invalid = Some(err);
                }
            });
            if let Some(err) = invalid {
                return Err(err);
            }

            registry.ensure_label(VariableId::CandidateFit, &rule.consequent)?;
        }

        Ok(Self { rules })
    }

    pub fn standard(registry: &VariableRegistry) -> Result<Self, FuzzyError> {
        use VariableId::{Education, Experience, ProfileStrength, SkillMatch};

        let rule = |number, antecedent, consequent: &str| Rule {
            number,
            antecedent,
            consequent: consequent.to_string(),
        };
        let is = Antecedent::is;

        Self::new(
            vec![
                rule(
                    1,
                    is(SkillMatch, "High").and(is(Experience, "Matched")),
                    "Top Candidate",
                ),
                rule(
                    2,
                    is(SkillMatch, "High").and(is(Experience, "Some")),
                    "Good Fit",
                ),
                rule(
                    3,
                    is(SkillMatch, "Low").or(is(Experience, "None")),
                    "Poor Fit",
                ),
                rule(
                    4,
                    is(SkillMatch, "High").and(is(Education, "Advanced")),
                    "Top Candidate",
                ),
                rule(
                    5,
                    is(SkillMatch, "Medium").and(is(Experience, "Some")),
                    "Possible Fit",
                ),
                rule(
                    6,
                    is(SkillMatch, "High").and(is(ProfileStrength, "Strong")),
                    "Good Fit",
                ),
                rule(
                    7,
                    is(Experience, "None").and(is(ProfileStrength, "Weak")),
                    "Poor Fit",
                ),
                rule(
                    8,
                    is(SkillMatch, "Medium").and(is(ProfileStrength, "Average")),
                    "Possible Fit",
                ),
            ],
            registry,
        )
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Fires every rule in order.
    pub fn fire<F>(&self, degree: F) -> Result<Vec<RuleActivation>, FuzzyError>
    where
        F: Fn(VariableId, &str) -> Result<f64, FuzzyError>,
    {
        self.rules
            .iter()
            .map(|rule| {
                Ok(RuleActivation {
                    rule: rule.number,
                    antecedent: rule.antecedent.to_string(),
                    consequent: rule.consequent.clone(),
                    strength: rule.antecedent.strength(&degree)?,
                })
            })
            .collect()
    }
}
