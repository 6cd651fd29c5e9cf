use super::common::*;
use crate::fuzzy::{
    infer, standard_engine, FitOutcome, FuzzyError, InferenceEngine, MIN_RESOLUTION,
};

#[test]
fn experienced_specialist_lands_in_top_band() {
    let engine = engine();
    let inference = engine
        .evaluate(&signals(8.0, 90.0, 4.0, 8.0, 3))
        .expect("inference succeeds");

    assert_eq!(inference.profile_strength, 7.0);
    assert_eq!(inference.outcome, FitOutcome::Scored);
    assert!((80.0..=95.0).contains(&inference.score));
    assert!((inference.score - 87.38).abs() < 0.011, "{}", inference.score);

    assert!((strength_of(&inference.activations, 1) - 2.0 / 3.0).abs() < 1e-9);
    assert!((strength_of(&inference.activations, 4) - 0.5).abs() < 1e-9);
    assert!((strength_of(&inference.activations, 6) - 0.25).abs() < 1e-9);
    assert_eq!(strength_of(&inference.activations, 3), 0.0);
    assert_eq!(inference.dominant_label.as_deref(), Some("Top Candidate"));
}

#[test]
fn newcomer_without_skills_lands_in_poor_band() {
    let engine = engine();
    let inference = engine
        .evaluate(&signals(0.0, 10.0, 2.0, 3.0, 0))
        .expect("inference succeeds");

    assert_eq!(inference.profile_strength, 1.5);
    assert_eq!(strength_of(&inference.activations, 3), 1.0);
    assert!((strength_of(&inference.activations, 7) - 0.625).abs() < 1e-9);
    assert!((0.0..=20.0).contains(&inference.score));
    assert!((inference.score - 13.0).abs() < 0.011, "{}", inference.score);
    assert_eq!(inference.dominant_label.as_deref(), Some("Poor Fit"));
}

#[test]
fn inputs_outside_every_support_fall_back_to_zero() {
    let engine = engine();
    let inference = engine
        .evaluate(&signals(20.0, -10.0, 3.0, -20.0, 0))
        .expect("inference succeeds");

    assert!(inference
        .activations
        .iter()
        .all(|activation| activation.strength == 0.0));
    assert_eq!(inference.outcome, FitOutcome::NoRuleFired);
    assert_eq!(inference.score, 0.0);
    assert!(inference.dominant_label.is_none());

    let again = engine
        .evaluate(&signals(20.0, -10.0, 3.0, -20.0, 0))
        .expect("inference succeeds");
    assert_eq!(again, inference);
}

#[test]
fn single_full_strength_rule_centres_within_its_consequent() {
    let engine = engine();
    let output = engine.registry().output();

    for rule in engine.rules().rules() {
        let activations = single_activation(&engine, rule.number);
        let (score, outcome) = engine.defuzzify(&activations);
        let (low, high) = output
            .term(&rule.consequent)
            .expect("consequent registered")
            .support();

        assert_eq!(outcome, FitOutcome::Scored);
        assert!(
            score >= low && score <= high,
            "rule {} centroid {score} outside [{low}, {high}]",
            rule.number
        );
    }
}

#[test]
fn symmetric_consequent_centres_on_its_peak() {
    let engine = engine();
    let (score, _) = engine.defuzzify(&single_activation(&engine, 2));
    assert_eq!(score, 80.0);
}

#[test]
fn rules_sharing_a_consequent_clip_at_the_strongest() {
    let engine = engine();
    let mut activations = single_activation(&engine, 1);
    let (alone, _) = engine.defuzzify(&activations);

    // Rule 4 also targets Top Candidate; a weaker activation must not move the centroid.
    activations[3].strength = 0.4;
    let (combined, _) = engine.defuzzify(&activations);
    assert_eq!(alone, combined);
}

#[test]
fn scores_are_rounded_to_two_decimals() {
    let engine = engine();
    for (experience, skill) in [(2.0, 60.0), (5.5, 77.0), (12.0, 95.0), (3.3, 41.7)] {
        let inference = engine
            .evaluate(&signals(experience, skill, 3.0, 7.5, 4))
            .expect("inference succeeds");
        let cents = inference.score * 100.0;
        assert!((cents - cents.round()).abs() < 1e-6, "{}", inference.score);
        assert!((0.0..=100.0).contains(&inference.score));
    }
}

#[test]
fn repeated_inference_is_identical() {
    let engine = engine();
    let candidate = signals(2.0, 60.0, 3.0, 7.5, 4);
    let first = engine.evaluate(&candidate).expect("first run");
    let second = engine.evaluate(&candidate).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn finer_resolution_moves_the_centroid_slightly() {
    let coarse = engine();
    let fine = InferenceEngine::standard(0.5).expect("half-step engine");
    assert_eq!(fine.resolution(), 0.5);

    let candidate = signals(8.0, 90.0, 4.0, 8.0, 3);
    let coarse_score = coarse.evaluate(&candidate).expect("coarse").score;
    let fine_score = fine.evaluate(&candidate).expect("fine").score;
    assert!((coarse_score - fine_score).abs() < 1.0);
}

#[test]
fn vanishing_resolution_is_rejected_at_construction() {
    for step in [1e-300, 1e-9] {
        assert!(matches!(
            InferenceEngine::standard(step),
            Err(FuzzyError::InvalidUniverse { .. })
        ));
    }

    let finest = InferenceEngine::standard(MIN_RESOLUTION).expect("finest accepted step");
    let score = finest
        .evaluate(&signals(8.0, 90.0, 4.0, 8.0, 3))
        .expect("fine engine scores")
        .score;
    assert!((80.0..=95.0).contains(&score));
}

#[test]
fn standard_engine_is_shared_and_matches_a_fresh_one() {
    let shared = standard_engine().expect("standard engine");
    let again = standard_engine().expect("standard engine");
    assert!(std::ptr::eq(shared, again));

    let score = infer(8.0, 90.0, 4.0, 8.0, 3).expect("inference succeeds");
    let fresh = engine()
        .evaluate(&signals(8.0, 90.0, 4.0, 8.0, 3))
        .expect("inference succeeds");
    assert_eq!(score, fresh.score);
}

#[test]
fn engine_can_be_shared_across_threads() {
    let engine = std::sync::Arc::new(engine());
    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                engine
                    .evaluate(&signals(offset as f64 * 3.0, 85.0, 4.0, 8.0, 2))
                    .expect("inference succeeds")
                    .score
            })
        })
        .collect();

    for (offset, handle) in handles.into_iter().enumerate() {
        let threaded = handle.join().expect("worker finished");
        let direct = engine
            .evaluate(&signals(offset as f64 * 3.0, 85.0, 4.0, 8.0, 2))
            .expect("inference succeeds")
            .score;
        assert_eq!(threaded, direct);
    }
}
