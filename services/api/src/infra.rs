use candidate_fit::config::InferenceConfig;
use candidate_fit::error::AppError;
use candidate_fit::fuzzy::MIN_RESOLUTION;
use candidate_fit::scoring::FitScoringService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the scoring service once; an inconsistent rule base aborts startup.
pub(crate) fn scoring_service(config: &InferenceConfig) -> Result<FitScoringService, AppError> {
    Ok(FitScoringService::standard(config.resolution)?)
}

pub(crate) fn parse_resolution(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a number ({err})"))?;
    if !value.is_finite() || value < MIN_RESOLUTION || value > 100.0 {
        return Err(format!(
            "resolution must be between {MIN_RESOLUTION} and 100, got {raw}"
        ));
    }
    Ok(value)
}
