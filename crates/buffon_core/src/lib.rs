//! Buffon's needle Monte Carlo engine
//!
//! This crate estimates π by simulating Buffon's needle experiment: needles
//! of length `l` are dropped on a grid of parallel lines spaced `d` apart
//! (with `l <= d`), and the fraction that cross a line recovers π through
//! the classic ratio `π ≈ 2·l·N / (d·crossings)`. It provides:
//! - Uniform needle sampling with explicit, seedable randomness
//! - A pure geometric crossing test
//! - Single-trial estimation with explicit handling of the zero-crossing case
//! - Sweeps over increasing sample sizes with cumulative and grouped views
//! - Scatter data (needle positions + crossing outcomes) for rendering
//!
//! The crate performs no I/O; callers receive plain numeric sequences.
//!
//! # Example
//!
//! ```ignore
//! use buffon_core::{Experiment, SweepConfig, run_sweep};
//!
//! let config = SweepConfig::builder()
//!     .spacing(2.0)
//!     .needle_len(1.0)
//!     .count_range(100, 10_000, 100)
//!     .repetitions(5)
//!     .seed(42)
//!     .build()?;
//!
//! let sweep = run_sweep(&config)?;
//! for point in sweep.cumulative() {
//!     println!("{} {}", point.needle_count, point.estimate);
//! }
//! # Ok::<(), buffon_core::ParameterError>(())
//! ```

#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod simulation;

#[cfg(test)]
mod tests;

pub use analysis::{BucketStatistics, CumulativePoint, GroupBucket, run_sweep};
pub use config::{Experiment, SweepBuilder, SweepConfig};
pub use error::{ParameterError, UndefinedEstimate};
pub use model::{
    Needle, NeedleDrop, NeedleField, Point, SweepResult, SweepTrial, ThrownNeedle, TrialResult,
};
pub use simulation::{run_trial, simulate_trial, throw_needles};
