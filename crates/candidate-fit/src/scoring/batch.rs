use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::fuzzy::{CandidateSignals, FitOutcome, FuzzyError, InferenceEngine};

#[derive(Debug)]
pub enum BatchScoringError {
    Io(std::io::Error),
    Csv(csv::Error),
    Engine { candidate: String, source: FuzzyError },
}

impl std::fmt::Display for BatchScoringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchScoringError::Io(err) => write!(f, "failed to read candidate file: {}", err),
            BatchScoringError::Csv(err) => write!(f, "invalid candidate CSV data: {}", err),
            BatchScoringError::Engine { candidate, source } => {
                write!(f, "could not score candidate '{}': {}", candidate, source)
            }
        }
    }
}

impl std::error::Error for BatchScoringError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchScoringError::Io(err) => Some(err),
            BatchScoringError::Csv(err) => Some(err),
            BatchScoringError::Engine { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for BatchScoringError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchScoringError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    #[serde(rename = "candidate")]
    name: String,
    experience: f64,
    skill_match: f64,
    education: f64,
    cgpa: f64,
    projects: u32,
}

/// One scored CSV row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub candidate: String,
    pub fit_score: f64,
    pub outcome: FitOutcome,
    pub dominant_label: Option<String>,
}

/// Totals of a batch run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchSummary {
    pub scored: usize,
    pub no_rule_fired: usize,
}

/// Scores candidates read from CSV with headers
/// `candidate,experience,skill_match,education,cgpa,projects`.
pub struct BatchScorer<'a> {
    engine: &'a InferenceEngine,
}

impl<'a> BatchScorer<'a> {
    pub fn new(engine: &'a InferenceEngine) -> Self {
        Self { engine }
    }

    pub fn score_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<ScoredCandidate>, BatchScoringError> {
        let file = std::fs::File::open(path)?;
        self.score_reader(file)
    }

    pub fn score_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<Vec<ScoredCandidate>, BatchScoringError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut scored = Vec::new();
        for row in csv_reader.deserialize::<CandidateRow>() {
            let row = row?;
            let signals = CandidateSignals {
                experience: row.experience,
                skill_match: row.skill_match,
                education: row.education,
                cgpa: row.cgpa,
                projects: row.projects,
            };
            let inference = self
                .engine
                .evaluate(&signals)
                .map_err(|source| BatchScoringError::Engine {
                    candidate: row.name.clone(),
                    source,
                })?;

            debug!(candidate = %row.name, score = inference.score, "batch row scored");
            scored.push(ScoredCandidate {
                candidate: row.name,
                fit_score: inference.score,
                outcome: inference.outcome,
                dominant_label: inference.dominant_label,
            });
        }

        Ok(scored)
    }

    /// Scores every row and writes `candidate,fit_score,outcome,dominant_label`.
    pub fn score_to_writer<R: Read, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<BatchSummary, BatchScoringError> {
        let rows = self.score_reader(reader)?;
        let mut csv_writer = csv::Writer::from_writer(writer);
        let mut summary = BatchSummary::default();

        for row in &rows {
            if row.outcome == FitOutcome::NoRuleFired {
                summary.no_rule_fired += 1;
            }
            summary.scored += 1;
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;

        info!(
            scored = summary.scored,
            no_rule_fired = summary.no_rule_fired,
            "batch scoring complete"
        );
        Ok(summary)
    }
}
