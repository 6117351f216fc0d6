//! Experiment and sweep configuration
//!
//! `Experiment` is the validated parameter pair every other component takes;
//! it can only be built through [`Experiment::new`], so the short-needle
//! precondition `needle_len <= spacing` holds everywhere downstream.
//!
//! # Builder DSL
//!
//! Sweeps are most conveniently assembled with the fluent builder:
//!
//! ```ignore
//! use buffon_core::SweepConfig;
//!
//! let config = SweepConfig::builder()
//!     .spacing(1.0)
//!     .needle_len(0.5)
//!     .counts([50, 500, 5_000])
//!     .repetitions(20)
//!     .seed(7)
//!     .build()?;
//! ```

use std::f64::consts::PI;

use serde::Serialize;

use crate::error::{ParameterError, Result};

/// Validated Buffon experiment parameters.
///
/// `spacing` is the distance between adjacent grid lines and `needle_len`
/// the length of every needle. Fields are private so the short-needle
/// invariant `needle_len <= spacing` cannot be broken after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Experiment {
    spacing: f64,
    needle_len: f64,
}

impl Experiment {
    /// Validate and create an experiment.
    ///
    /// Fails if either length is not a positive finite number, or if the
    /// needle is longer than the line spacing.
    pub fn new(spacing: f64, needle_len: f64) -> Result<Self> {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(ParameterError::NonPositiveSpacing(spacing));
        }
        if !needle_len.is_finite() || needle_len <= 0.0 {
            return Err(ParameterError::NonPositiveNeedleLength(needle_len));
        }
        if needle_len > spacing {
            return Err(ParameterError::NeedleLongerThanSpacing {
                needle_len,
                spacing,
            });
        }
        Ok(Self {
            spacing,
            needle_len,
        })
    }

    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    #[must_use]
    pub fn needle_len(&self) -> f64 {
        self.needle_len
    }

    /// Whether a needle at perpendicular distance `offset` from the nearest
    /// line, at `angle` radians to the lines, crosses that line.
    ///
    /// Pure geometry: crosses iff `offset <= (l/2)·sin(angle)`. The boundary
    /// case counts as a crossing.
    #[must_use]
    pub fn crosses(&self, offset: f64, angle: f64) -> bool {
        offset <= 0.5 * self.needle_len * angle.sin()
    }

    /// Theoretical crossing probability `2·l / (π·d)` of the short-needle
    /// model.
    #[must_use]
    pub fn crossing_probability(&self) -> f64 {
        2.0 * self.needle_len / (PI * self.spacing)
    }

    /// π estimate from raw counts: `2·l·N / (d·C)`.
    ///
    /// Returns `None` when `crossing_count` is zero; the ratio estimator has
    /// no defined value in that case.
    #[must_use]
    pub fn estimate_from_counts(&self, needle_count: u64, crossing_count: u64) -> Option<f64> {
        if crossing_count == 0 {
            return None;
        }
        Some(
            2.0 * self.needle_len * needle_count as f64
                / (self.spacing * crossing_count as f64),
        )
    }
}

/// Configuration for a sampling sweep: repeated trials across a list of
/// needle counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepConfig {
    pub experiment: Experiment,
    /// Needle counts to run, in order. Must be non-decreasing.
    pub needle_counts: Vec<u64>,
    /// Independent trials per needle count.
    pub repetitions: u32,
    /// Seed of the sweep; each trial derives its own child seed from it.
    pub seed: u64,
}

impl SweepConfig {
    #[must_use]
    pub fn builder() -> SweepBuilder {
        SweepBuilder::new()
    }

    /// Check the sweep-level parameters.
    ///
    /// The experiment itself is already valid by construction; this guards
    /// the count list and repetition count.
    pub fn validate(&self) -> Result<()> {
        if self.needle_counts.is_empty() {
            return Err(ParameterError::EmptyCountList);
        }
        if self.repetitions == 0 {
            return Err(ParameterError::ZeroRepetitions);
        }
        let mut previous = 0u64;
        for (index, &count) in self.needle_counts.iter().enumerate() {
            if count == 0 {
                return Err(ParameterError::ZeroNeedleCount);
            }
            if count < previous {
                return Err(ParameterError::DecreasingCounts {
                    index,
                    previous,
                    current: count,
                });
            }
            previous = count;
        }
        Ok(())
    }

    /// Total number of trials the sweep will run.
    #[must_use]
    pub fn trial_count(&self) -> usize {
        self.needle_counts.len() * self.repetitions as usize
    }
}

/// Fluent builder for [`SweepConfig`].
///
/// Defaults match the classic demonstration setup: spacing 1.0, needle
/// length 0.5, one repetition per count, seed 0.
#[derive(Debug, Clone)]
pub struct SweepBuilder {
    spacing: f64,
    needle_len: f64,
    needle_counts: Vec<u64>,
    repetitions: u32,
    seed: u64,
}

impl Default for SweepBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            spacing: 1.0,
            needle_len: 0.5,
            needle_counts: Vec::new(),
            repetitions: 1,
            seed: 0,
        }
    }

    /// Set the grid line spacing.
    #[must_use]
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the needle length.
    #[must_use]
    pub fn needle_len(mut self, needle_len: f64) -> Self {
        self.needle_len = needle_len;
        self
    }

    /// Set the needle counts to sweep, replacing any previous list.
    #[must_use]
    pub fn counts<I>(mut self, counts: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        self.needle_counts = counts.into_iter().collect();
        self
    }

    /// Append an arithmetic range of needle counts: `start`, `start + step`,
    /// … up to but excluding `stop`.
    #[must_use]
    pub fn count_range(mut self, start: u64, stop: u64, step: u64) -> Self {
        if step > 0 {
            let mut count = start;
            while count < stop {
                self.needle_counts.push(count);
                count += step;
            }
        }
        self
    }

    /// Set the number of independent trials per needle count.
    #[must_use]
    pub fn repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Set the sweep seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the collected parameters and produce the config.
    pub fn build(self) -> Result<SweepConfig> {
        let config = SweepConfig {
            experiment: Experiment::new(self.spacing, self.needle_len)?,
            needle_counts: self.needle_counts,
            repetitions: self.repetitions,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
