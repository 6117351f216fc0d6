//! Tests for single-trial estimation: the formula, determinism,
//! zero-crossing signaling, and convergence toward π

use std::f64::consts::PI;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Experiment;
use crate::error::ParameterError;
use crate::model::TrialResult;
use crate::simulation::{run_trial, simulate_trial, throw_needles};

#[test]
fn estimate_follows_the_ratio_formula() {
    let experiment = Experiment::new(2.0, 1.0).unwrap();
    // 2·l·N / (d·C) = 2·1·355 / (2·113) = 355/113
    let result = TrialResult::from_counts(&experiment, 355, 113);
    let estimate = result.require_estimate().unwrap();
    assert!(
        (estimate - 355.0 / 113.0).abs() < 1e-12,
        "expected 355/113, got {estimate}"
    );
}

#[test]
fn zero_crossings_yield_an_undefined_estimate() {
    let experiment = Experiment::new(2.0, 1.0).unwrap();
    let result = TrialResult::from_counts(&experiment, 100, 0);

    assert!(result.is_undefined());
    assert_eq!(result.estimate, None);

    let err = result.require_estimate().unwrap_err();
    assert_eq!(err.needle_count, 100);
}

#[test]
fn sparse_grid_produces_undefined_trials() {
    // with d=1000 and l=1 a single needle almost never crosses
    let experiment = Experiment::new(1_000.0, 1.0).unwrap();
    let undefined = (0..10)
        .filter(|&seed| {
            simulate_trial(&experiment, 1, seed)
                .unwrap()
                .is_undefined()
        })
        .count();
    assert!(
        undefined >= 1,
        "expected undefined trials on a near-empty grid, got {undefined} of 10"
    );
}

#[test]
fn identical_seeds_produce_identical_trials() {
    let experiment = Experiment::new(2.0, 1.0).unwrap();
    let a = simulate_trial(&experiment, 10_000, 42).unwrap();
    let b = simulate_trial(&experiment, 10_000, 42).unwrap();
    assert_eq!(a, b);
}

#[test]
fn run_trial_is_deterministic_for_a_given_generator_state() {
    let experiment = Experiment::new(2.0, 1.0).unwrap();
    let mut rng_a = StdRng::seed_from_u64(123);
    let mut rng_b = StdRng::seed_from_u64(123);
    let a = run_trial(&experiment, 5_000, &mut rng_a).unwrap();
    let b = run_trial(&experiment, 5_000, &mut rng_b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_needle_count_fails_before_sampling() {
    let experiment = Experiment::new(2.0, 1.0).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let err = run_trial(&experiment, 0, &mut rng).unwrap_err();
    assert_eq!(err, ParameterError::ZeroNeedleCount);
}

#[test]
fn large_trials_converge_toward_pi() {
    let experiment = Experiment::new(2.0, 1.0).unwrap();
    let result = simulate_trial(&experiment, 100_000, 42).unwrap();
    let estimate = result.require_estimate().unwrap();
    // the binomial standard error puts the estimate within ~0.015 of π;
    // 0.1 is several standard errors of headroom
    assert!(
        (estimate - PI).abs() < 0.1,
        "estimate {estimate} should be within 0.1 of π"
    );
}

#[test]
fn thrown_needles_agree_with_their_offsets() {
    let experiment = Experiment::new(1.0, 0.5).unwrap();
    let field = throw_needles(&experiment, 2_000, 7).unwrap();

    assert_eq!(field.needle_count(), 2_000);
    for thrown in &field.throws {
        let offset = thrown.needle.line_offset(experiment.spacing());
        assert!(
            (0.0..=0.5 * experiment.spacing()).contains(&offset),
            "folded offset {offset} out of range"
        );
        assert_eq!(
            thrown.crosses,
            experiment.crosses(offset, thrown.needle.angle)
        );
    }
}

#[test]
fn thrown_needle_crossing_fraction_matches_the_model() {
    let experiment = Experiment::new(1.0, 0.5).unwrap();
    let field = throw_needles(&experiment, 20_000, 11).unwrap();
    let fraction = field.crossing_count() as f64 / field.needle_count() as f64;
    let expected = experiment.crossing_probability();
    assert!(
        (fraction - expected).abs() < 0.03,
        "crossing fraction {fraction} should be near {expected}"
    );
}

#[test]
fn running_estimates_skip_the_pre_crossing_prefix() {
    let experiment = Experiment::new(1.0, 0.5).unwrap();
    let field = throw_needles(&experiment, 1_000, 5).unwrap();
    let running = field.running_estimates();

    assert_eq!(running.len(), 1_000);
    // once a crossing has happened every later prefix has an estimate
    let first_defined = running.iter().position(Option::is_some).unwrap();
    assert!(running[first_defined..].iter().all(Option::is_some));
    assert!(running[..first_defined].iter().all(Option::is_none));

    // the final running estimate matches the field's trial result
    let last = running.last().unwrap().unwrap();
    let folded = field.trial_result().require_estimate().unwrap();
    assert!((last - folded).abs() < 1e-12);
}

#[test]
fn throwing_needles_is_deterministic() {
    let experiment = Experiment::new(1.0, 0.5).unwrap();
    let a = throw_needles(&experiment, 100, 21).unwrap();
    let b = throw_needles(&experiment, 100, 21).unwrap();
    assert_eq!(a, b);
}
