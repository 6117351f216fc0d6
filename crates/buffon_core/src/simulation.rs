//! Trial execution: dropping needles and counting crossings.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::Experiment;
use crate::error::{ParameterError, Result};
use crate::model::{FieldSampler, NeedleField, NeedleSampler, ThrownNeedle, TrialResult};

/// Line gaps spanned by the square field produced by [`throw_needles`].
pub const FIELD_GAPS: u32 = 10;

/// Run one trial: drop `needle_count` needles and count crossings.
///
/// The caller provides the randomness source, so independent streams and
/// reproducible runs need no global state. Fails before consuming any
/// entropy when `needle_count` is zero.
pub fn run_trial<R: Rng + ?Sized>(
    experiment: &Experiment,
    needle_count: u64,
    rng: &mut R,
) -> Result<TrialResult> {
    if needle_count == 0 {
        return Err(ParameterError::ZeroNeedleCount);
    }
    let sampler = NeedleSampler::new(experiment)?;

    let mut crossing_count = 0u64;
    for _ in 0..needle_count {
        let drop = sampler.sample(rng);
        if experiment.crosses(drop.offset, drop.angle) {
            crossing_count += 1;
        }
    }

    Ok(TrialResult::from_counts(
        experiment,
        needle_count,
        crossing_count,
    ))
}

/// Seeded convenience wrapper around [`run_trial`].
///
/// Identical `(experiment, needle_count, seed)` inputs produce identical
/// results.
pub fn simulate_trial(experiment: &Experiment, needle_count: u64, seed: u64) -> Result<TrialResult> {
    let mut rng = SmallRng::seed_from_u64(seed);
    run_trial(experiment, needle_count, &mut rng)
}

/// Drop `needle_count` needles across a planar field and record each one
/// with its crossing outcome.
///
/// This is the data set behind a randomized-needles scatter plot; the
/// estimator path does not need planar positions and uses [`run_trial`]
/// instead.
pub fn throw_needles(experiment: &Experiment, needle_count: u64, seed: u64) -> Result<NeedleField> {
    if needle_count == 0 {
        return Err(ParameterError::ZeroNeedleCount);
    }
    let sampler = FieldSampler::new(experiment, FIELD_GAPS)?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let spacing = experiment.spacing();
    let throws = (0..needle_count)
        .map(|_| {
            let needle = sampler.sample(&mut rng);
            let crosses = experiment.crosses(needle.line_offset(spacing), needle.angle);
            ThrownNeedle { needle, crosses }
        })
        .collect();

    Ok(NeedleField {
        experiment: *experiment,
        gaps: FIELD_GAPS,
        throws,
    })
}
