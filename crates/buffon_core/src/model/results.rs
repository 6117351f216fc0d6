//! Result types produced by trials and sweeps.

use serde::Serialize;

use crate::config::Experiment;
use crate::error::UndefinedEstimate;

/// Outcome of a single trial of `needle_count` needle drops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialResult {
    pub needle_count: u64,
    pub crossing_count: u64,
    /// `None` when no needle crossed a line; the ratio estimator has no
    /// defined value in that case.
    pub estimate: Option<f64>,
}

impl TrialResult {
    /// Build a result from raw counts, computing the estimate when defined.
    #[must_use]
    pub fn from_counts(experiment: &Experiment, needle_count: u64, crossing_count: u64) -> Self {
        Self {
            needle_count,
            crossing_count,
            estimate: experiment.estimate_from_counts(needle_count, crossing_count),
        }
    }

    /// Whether the trial recorded zero crossings.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        self.estimate.is_none()
    }

    /// The estimate, or [`UndefinedEstimate`] when the trial crossed
    /// nothing. Callers that can tolerate the missing value should read
    /// `estimate` directly instead.
    pub fn require_estimate(&self) -> Result<f64, UndefinedEstimate> {
        self.estimate.ok_or(UndefinedEstimate {
            needle_count: self.needle_count,
        })
    }
}

/// One entry of a sweep: the trial outcome at a (needle count, repetition)
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepTrial {
    pub needle_count: u64,
    /// 0-based repetition index within this needle count's bucket.
    pub repetition: u32,
    pub result: TrialResult,
}

/// All trials of a sweep in execution order, together with the experiment
/// they ran under, so derived views are self-contained.
///
/// Needle counts are non-decreasing across `trials`; the sweep config
/// rejects anything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    pub experiment: Experiment,
    pub trials: Vec<SweepTrial>,
}

impl SweepResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Total needles dropped across every trial.
    #[must_use]
    pub fn total_needles(&self) -> u64 {
        self.trials.iter().map(|t| t.result.needle_count).sum()
    }

    /// Trials that recorded zero crossings.
    #[must_use]
    pub fn undefined_trials(&self) -> u64 {
        self.trials
            .iter()
            .filter(|t| t.result.is_undefined())
            .count() as u64
    }
}
