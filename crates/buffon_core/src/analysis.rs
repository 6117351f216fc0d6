//! Sweep execution and the derived views over its trials.
//!
//! A sweep runs the single-trial estimator repeatedly across a list of
//! needle counts, with a fixed number of repetitions per count. Two views
//! are derived from the trial sequence:
//!
//! - the **cumulative view** accumulates needle and crossing counts across
//!   the sequence and reports one running estimate per prefix, showing
//!   convergence toward π;
//! - the **grouped view** collects the independent estimates observed at
//!   each needle count, for studying estimator variance at a fixed sample
//!   size.
//!
//! ```ignore
//! use buffon_core::{SweepConfig, run_sweep};
//!
//! let config = SweepConfig::builder()
//!     .spacing(2.0)
//!     .needle_len(1.0)
//!     .counts([50])
//!     .repetitions(20)
//!     .seed(3)
//!     .build()?;
//!
//! let sweep = run_sweep(&config)?;
//! let buckets = sweep.grouped();
//! assert_eq!(buckets.len(), 1);
//! # Ok::<(), buffon_core::ParameterError>(())
//! ```

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::config::SweepConfig;
use crate::error::Result;
use crate::model::{SweepResult, SweepTrial};
use crate::simulation::run_trial;

/// Run every trial of a sweep, in count order.
///
/// Each trial gets its own child seed drawn from a generator seeded with
/// the config seed, so the whole sweep is reproducible from one number and
/// trials stay independent of each other.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepResult> {
    config.validate()?;

    let mut seeder = SmallRng::seed_from_u64(config.seed);
    let mut trials = Vec::with_capacity(config.trial_count());

    for &needle_count in &config.needle_counts {
        for repetition in 0..config.repetitions {
            let mut rng = SmallRng::seed_from_u64(seeder.next_u64());
            let result = run_trial(&config.experiment, needle_count, &mut rng)?;
            trials.push(SweepTrial {
                needle_count,
                repetition,
                result,
            });
        }
    }

    Ok(SweepResult {
        experiment: config.experiment,
        trials,
    })
}

/// One point of the cumulative view: the running estimate over a prefix of
/// the sweep's trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CumulativePoint {
    /// Total needles dropped across the prefix.
    pub needle_count: u64,
    pub estimate: f64,
}

/// One bucket of the grouped view: the independent estimates observed at a
/// fixed needle count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupBucket {
    pub needle_count: u64,
    /// Defined estimates, one per repetition whose trial crossed a line.
    pub estimates: Vec<f64>,
    /// Repetitions whose trial crossed nothing. Excluded from `estimates`,
    /// counted here rather than dropped.
    pub undefined_trials: u32,
}

impl GroupBucket {
    /// Summary statistics of the bucket's defined estimates, or `None` when
    /// every repetition was undefined.
    #[must_use]
    pub fn statistics(&self) -> Option<BucketStatistics> {
        if self.estimates.is_empty() {
            return None;
        }
        let n = self.estimates.len() as f64;
        let mean = self.estimates.iter().sum::<f64>() / n;
        let variance = self
            .estimates
            .iter()
            .map(|e| (e - mean).powi(2))
            .sum::<f64>()
            / n;
        let min = self.estimates.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .estimates
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        Some(BucketStatistics {
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
            trials: self.estimates.len(),
        })
    }
}

/// Summary statistics of one bucket's defined estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BucketStatistics {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Number of defined estimates the statistics cover.
    pub trials: usize,
}

impl SweepResult {
    /// Cumulative view: running estimates over growing prefixes of the
    /// trial sequence.
    ///
    /// Needle and crossing counts accumulate in sequence order; each prefix
    /// with a positive crossing total contributes one point. Prefixes with
    /// no crossings yet are skipped, never emitted as zero or infinity.
    #[must_use]
    pub fn cumulative(&self) -> Vec<CumulativePoint> {
        let mut needles = 0u64;
        let mut crossings = 0u64;
        let mut points = Vec::with_capacity(self.trials.len());

        for trial in &self.trials {
            needles += trial.result.needle_count;
            crossings += trial.result.crossing_count;
            if let Some(estimate) = self.experiment.estimate_from_counts(needles, crossings) {
                points.push(CumulativePoint {
                    needle_count: needles,
                    estimate,
                });
            }
        }

        points
    }

    /// Grouped view: per needle count, the independent estimates of its
    /// repetitions, sorted by needle count.
    ///
    /// Undefined trials are counted per bucket, not folded into the
    /// estimates.
    #[must_use]
    pub fn grouped(&self) -> Vec<GroupBucket> {
        let mut buckets: FxHashMap<u64, GroupBucket> = FxHashMap::default();

        for trial in &self.trials {
            let bucket = buckets
                .entry(trial.needle_count)
                .or_insert_with(|| GroupBucket {
                    needle_count: trial.needle_count,
                    estimates: Vec::new(),
                    undefined_trials: 0,
                });
            match trial.result.estimate {
                Some(estimate) => bucket.estimates.push(estimate),
                None => bucket.undefined_trials += 1,
            }
        }

        // Map iteration order is arbitrary; sort so the view is deterministic.
        let mut out: Vec<_> = buckets.into_values().collect();
        out.sort_by_key(|b| b.needle_count);
        out
    }
}
