//! Request handling around the fuzzy engine: input validation, the scoring
//! service, HTTP routes, and CSV batch scoring.

pub mod batch;
pub mod domain;
pub mod router;
pub mod service;
pub mod skills;

#[cfg(test)]
mod tests;

pub use batch::{BatchScorer, BatchScoringError, BatchSummary, ScoredCandidate};
pub use domain::{FitReport, FitRequest, RequestError};
pub use router::fit_router;
pub use service::{FitScoringService, ScoringServiceError};
pub use skills::skill_match_percentage;
