//! Needle entities and the uniform sampling model.
//!
//! Angle convention: angles are drawn from `[0, π/2]`. By the symmetry of
//! the grid, the classic `[0, π)` range folds onto the half range without
//! changing the crossing probability, so half the range (and half the
//! entropy) suffices. All angles in this crate follow that convention.

use std::f64::consts::FRAC_PI_2;

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::Serialize;

use crate::config::Experiment;
use crate::error::{ParameterError, Result};
use crate::model::results::TrialResult;

/// A point in the plane of the grid. Grid lines run parallel to the x axis
/// at integer multiples of the spacing along y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A dropped needle in reduced coordinates: the perpendicular distance from
/// its center to the nearest grid line, and its angle to the lines.
///
/// These two values are all the crossing test needs; they are the two
/// independent uniform draws of the probability model. Immutable once drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NeedleDrop {
    /// Distance to the nearest line, in `[0, spacing/2]`.
    pub offset: f64,
    /// Angle to the lines, in `[0, π/2]`.
    pub angle: f64,
}

/// A needle placed in the plane, for scatter rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Needle {
    pub center: Point,
    /// Angle to the grid lines, in `[0, π/2]`.
    pub angle: f64,
}

impl Needle {
    /// Perpendicular distance from the center to the nearest grid line.
    #[must_use]
    pub fn line_offset(&self, spacing: f64) -> f64 {
        let r = self.center.y.rem_euclid(spacing);
        r.min(spacing - r)
    }

    /// Segment endpoints of a needle of length `len` at this center and
    /// angle.
    #[must_use]
    pub fn endpoints(&self, len: f64) -> (Point, Point) {
        let (sin, cos) = self.angle.sin_cos();
        let dx = 0.5 * len * cos;
        let dy = 0.5 * len * sin;
        (
            Point {
                x: self.center.x - dx,
                y: self.center.y - dy,
            },
            Point {
                x: self.center.x + dx,
                y: self.center.y + dy,
            },
        )
    }
}

/// A needle together with its crossing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThrownNeedle {
    pub needle: Needle,
    pub crosses: bool,
}

/// Uniform sampler for needle drops in reduced coordinates.
///
/// The distributions are built once at construction and reused across
/// draws. Sampling consumes entropy from the caller's generator and has no
/// other side effect.
#[derive(Debug, Clone)]
pub struct NeedleSampler {
    offset: Uniform<f64>,
    angle: Uniform<f64>,
}

impl NeedleSampler {
    /// Build the offset and angle distributions for an experiment.
    pub fn new(experiment: &Experiment) -> Result<Self> {
        let half_spacing = 0.5 * experiment.spacing();
        let offset = Uniform::new_inclusive(0.0, half_spacing).map_err(|_| {
            ParameterError::InvalidDistribution {
                what: "needle offset",
                low: 0.0,
                high: half_spacing,
            }
        })?;
        let angle = Uniform::new_inclusive(0.0, FRAC_PI_2).map_err(|_| {
            ParameterError::InvalidDistribution {
                what: "needle angle",
                low: 0.0,
                high: FRAC_PI_2,
            }
        })?;
        Ok(Self { offset, angle })
    }

    /// Draw one needle: two independent uniform draws.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NeedleDrop {
        NeedleDrop {
            offset: self.offset.sample(rng),
            angle: self.angle.sample(rng),
        }
    }
}

/// Uniform sampler for planar needles over a square field.
///
/// The field spans `gaps` line spacings in each direction. Because the
/// height is a whole number of spacings, the folded offset of a uniformly
/// placed center keeps the same `U[0, spacing/2]` law as [`NeedleSampler`].
#[derive(Debug, Clone)]
pub struct FieldSampler {
    position: Uniform<f64>,
    angle: Uniform<f64>,
}

impl FieldSampler {
    /// Build a sampler over a field of `gaps` line spacings.
    pub fn new(experiment: &Experiment, gaps: u32) -> Result<Self> {
        let extent = f64::from(gaps.max(1)) * experiment.spacing();
        let position = Uniform::new(0.0, extent).map_err(|_| {
            ParameterError::InvalidDistribution {
                what: "needle position",
                low: 0.0,
                high: extent,
            }
        })?;
        let angle = Uniform::new_inclusive(0.0, FRAC_PI_2).map_err(|_| {
            ParameterError::InvalidDistribution {
                what: "needle angle",
                low: 0.0,
                high: FRAC_PI_2,
            }
        })?;
        Ok(Self { position, angle })
    }

    /// Draw one planar needle.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Needle {
        Needle {
            center: Point {
                x: self.position.sample(rng),
                y: self.position.sample(rng),
            },
            angle: self.angle.sample(rng),
        }
    }
}

/// The data set behind the randomized-needles scatter: every thrown needle
/// with its crossing outcome, plus the grid geometry needed to render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeedleField {
    pub experiment: Experiment,
    /// Number of line gaps the square field spans; lines sit at
    /// `0, d, …, gaps·d` along y.
    pub gaps: u32,
    pub throws: Vec<ThrownNeedle>,
}

impl NeedleField {
    #[must_use]
    pub fn needle_count(&self) -> u64 {
        self.throws.len() as u64
    }

    #[must_use]
    pub fn crossing_count(&self) -> u64 {
        self.throws.iter().filter(|t| t.crosses).count() as u64
    }

    /// Fold the field's counts into a trial result.
    #[must_use]
    pub fn trial_result(&self) -> TrialResult {
        TrialResult::from_counts(&self.experiment, self.needle_count(), self.crossing_count())
    }

    /// Running π estimate after each throw, in throw order.
    ///
    /// Entries are `None` until the first crossing occurs; no prefix is ever
    /// reported as zero or infinity.
    #[must_use]
    pub fn running_estimates(&self) -> Vec<Option<f64>> {
        let mut crossings = 0u64;
        self.throws
            .iter()
            .enumerate()
            .map(|(i, t)| {
                if t.crosses {
                    crossings += 1;
                }
                self.experiment
                    .estimate_from_counts(i as u64 + 1, crossings)
            })
            .collect()
    }
}
