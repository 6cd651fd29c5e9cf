use std::sync::Arc;

use tracing::info;

use super::domain::{FitReport, FitRequest, RequestError};
use crate::fuzzy::{CandidateSignals, FitOutcome, FuzzyError, InferenceEngine};

/// Service wrapping a validated engine shared read-only across handlers.
pub struct FitScoringService {
    engine: Arc<InferenceEngine>,
}

impl FitScoringService {
    pub fn new(engine: Arc<InferenceEngine>) -> Self {
        Self { engine }
    }

    /// Builds and validates the standard variables and rules. Fails on any inconsistency.
    pub fn standard(resolution: f64) -> Result<Self, FuzzyError> {
        let engine = InferenceEngine::standard(resolution)?;
        info!(
            rules = engine.rules().len(),
            resolution, "fuzzy rule base validated"
        );
        Ok(Self::new(Arc::new(engine)))
    }

    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    /// Validate a request and score it with the full audit trail.
    pub fn score(&self, request: &FitRequest) -> Result<FitReport, ScoringServiceError> {
        let signals = request.signals()?;
        self.score_signals(signals)
    }

    pub fn score_signals(
        &self,
        signals: CandidateSignals,
    ) -> Result<FitReport, ScoringServiceError> {
        let inference = self.engine.evaluate(&signals)?;
        let report = FitReport::from_inference(signals, inference);

        info!(
            fit_score = report.fit_score,
            outcome = report.outcome.label(),
            "candidate scored"
        );
        Ok(report)
    }

    /// Score and outcome only, as returned by the legacy predict endpoint.
    pub fn predict(
        &self,
        request: &FitRequest,
    ) -> Result<(f64, FitOutcome), ScoringServiceError> {
        let report = self.score(request)?;
        if report.outcome == FitOutcome::NoRuleFired {
            info!("predict returning fallback score");
        }
        Ok((report.fit_score, report.outcome))
    }
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Engine(#[from] FuzzyError),
}
