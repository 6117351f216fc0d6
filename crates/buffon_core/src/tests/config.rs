//! Tests for parameter validation and the sweep builder

use crate::config::{Experiment, SweepConfig};
use crate::error::ParameterError;

#[test]
fn needle_longer_than_spacing_is_rejected() {
    let err = Experiment::new(1.0, 2.0).unwrap_err();
    assert_eq!(
        err,
        ParameterError::NeedleLongerThanSpacing {
            needle_len: 2.0,
            spacing: 1.0,
        }
    );
}

#[test]
fn non_positive_or_non_finite_lengths_are_rejected() {
    assert!(matches!(
        Experiment::new(0.0, 0.5),
        Err(ParameterError::NonPositiveSpacing(_))
    ));
    assert!(matches!(
        Experiment::new(-1.0, 0.5),
        Err(ParameterError::NonPositiveSpacing(_))
    ));
    assert!(matches!(
        Experiment::new(f64::NAN, 0.5),
        Err(ParameterError::NonPositiveSpacing(_))
    ));
    assert!(matches!(
        Experiment::new(1.0, 0.0),
        Err(ParameterError::NonPositiveNeedleLength(_))
    ));
    assert!(matches!(
        Experiment::new(1.0, f64::INFINITY),
        Err(ParameterError::NonPositiveNeedleLength(_))
    ));
}

#[test]
fn needle_as_long_as_spacing_is_allowed() {
    let experiment = Experiment::new(1.0, 1.0).unwrap();
    assert_eq!(experiment.spacing(), 1.0);
    assert_eq!(experiment.needle_len(), 1.0);
}

#[test]
fn builder_produces_validated_config() {
    let config = SweepConfig::builder()
        .spacing(2.0)
        .needle_len(1.0)
        .counts([10, 100, 1_000])
        .repetitions(3)
        .seed(9)
        .build()
        .unwrap();

    assert_eq!(config.needle_counts, vec![10, 100, 1_000]);
    assert_eq!(config.repetitions, 3);
    assert_eq!(config.seed, 9);
    assert_eq!(config.trial_count(), 9);
}

#[test]
fn count_range_is_start_inclusive_stop_exclusive() {
    let config = SweepConfig::builder()
        .count_range(100, 500, 100)
        .build()
        .unwrap();
    assert_eq!(config.needle_counts, vec![100, 200, 300, 400]);
}

#[test]
fn empty_count_list_is_rejected() {
    let err = SweepConfig::builder().build().unwrap_err();
    assert_eq!(err, ParameterError::EmptyCountList);
}

#[test]
fn zero_repetitions_are_rejected() {
    let err = SweepConfig::builder()
        .counts([10])
        .repetitions(0)
        .build()
        .unwrap_err();
    assert_eq!(err, ParameterError::ZeroRepetitions);
}

#[test]
fn zero_needle_count_is_rejected() {
    let err = SweepConfig::builder().counts([0]).build().unwrap_err();
    assert_eq!(err, ParameterError::ZeroNeedleCount);
}

#[test]
fn decreasing_counts_are_rejected() {
    let err = SweepConfig::builder()
        .counts([100, 50])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ParameterError::DecreasingCounts {
            index: 1,
            previous: 100,
            current: 50,
        }
    );
}

#[test]
fn repeated_counts_are_allowed() {
    let config = SweepConfig::builder().counts([50, 50, 50]).build().unwrap();
    assert_eq!(config.needle_counts.len(), 3);
}

#[test]
fn invalid_experiment_fails_the_builder() {
    // validation happens before any trial could run
    let err = SweepConfig::builder()
        .spacing(1.0)
        .needle_len(2.0)
        .counts([10])
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ParameterError::NeedleLongerThanSpacing { .. }
    ));
}
