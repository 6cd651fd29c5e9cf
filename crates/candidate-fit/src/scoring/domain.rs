use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::skills::skill_match_percentage;
use crate::fuzzy::{CandidateSignals, FitInference, FitOutcome, RuleActivation};

/// Raw payload of a scoring request. Every field is optional so that absent
/// values can be reported together instead of failing on the first one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitRequest {
    #[serde(default)]
    pub experience: Option<f64>,
    #[serde(default)]
    pub skill_match: Option<f64>,
    #[serde(default)]
    pub education: Option<f64>,
    #[serde(default)]
    pub cgpa: Option<f64>,
    #[serde(default)]
    pub projects: Option<f64>,
    /// Comma separated skills, used with `required_skills` when `skill_match` is absent.
    #[serde(default, alias = "candidateSkills")]
    pub candidate_skills: Option<String>,
    #[serde(default, alias = "requiredSkills")]
    pub required_skills: Option<String>,
}

impl FitRequest {
    /// Validates presence of the five inputs. `skill_match` may be derived from
    /// the two skill lists when both are supplied.
    pub fn signals(&self) -> Result<CandidateSignals, RequestError> {
        let skill_match = self.skill_match.or_else(|| {
            match (&self.candidate_skills, &self.required_skills) {
                (Some(candidate), Some(required)) => {
                    Some(skill_match_percentage(candidate, required))
                }
                _ => None,
            }
        });

        let mut missing = Vec::new();
        let mut require = |name: &'static str, value: Option<f64>| {
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };

        let experience = require("experience", self.experience);
        let skill_match = require("skill_match", skill_match);
        let education = require("education", self.education);
        let cgpa = require("cgpa", self.cgpa);
        let projects = require("projects", self.projects);

        if !missing.is_empty() {
            return Err(RequestError::MissingData { fields: missing });
        }

        for (field, value) in [
            ("experience", experience),
            ("skill_match", skill_match),
            ("education", education),
            ("cgpa", cgpa),
        ] {
            if !value.is_finite() {
                return Err(RequestError::InvalidValue {
                    field,
                    reason: "must be a finite number".to_string(),
                });
            }
        }

        Ok(CandidateSignals {
            experience,
            skill_match,
            education,
            cgpa,
            projects: project_count(projects)?,
        })
    }
}

fn project_count(raw: f64) -> Result<u32, RequestError> {
    if !raw.is_finite() || raw < 0.0 || raw.fract() != 0.0 || raw > f64::from(u32::MAX) {
        return Err(RequestError::InvalidValue {
            field: "projects",
            reason: format!("{raw} is not a non-negative whole number"),
        });
    }
    Ok(raw as u32)
}

/// Validation failures for incoming requests.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("Missing data")]
    MissingData { fields: Vec<&'static str> },
    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Scored response with the audit trail of the inference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    pub fit_score: f64,
    pub outcome: FitOutcome,
    pub inputs: CandidateSignals,
    pub profile_strength: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_label: Option<String>,
    pub rules: Vec<RuleActivation>,
    pub evaluated_at: DateTime<Utc>,
}

impl FitReport {
    pub fn from_inference(inputs: CandidateSignals, inference: FitInference) -> Self {
        Self {
            fit_score: inference.score,
            outcome: inference.outcome,
            inputs,
            profile_strength: inference.profile_strength,
            dominant_label: inference.dominant_label,
            rules: inference.activations,
            evaluated_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> String {
        match (&self.outcome, &self.dominant_label) {
            (FitOutcome::NoRuleFired, _) => {
                format!("{:.2} (no rule fired, fallback score)", self.fit_score)
            }
            (FitOutcome::Scored, Some(label)) => format!("{:.2} ({label})", self.fit_score),
            (FitOutcome::Scored, None) => format!("{:.2}", self.fit_score),
        }
    }
}
