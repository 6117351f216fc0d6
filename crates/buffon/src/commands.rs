//! Subcommand implementations: assemble a core config from CLI arguments,
//! run the engine, and hand the numeric results to the output writers.

use std::f64::consts::PI;
use std::io;

use clap::Args;
use rand::Rng;

use buffon_core::{Experiment, SweepConfig, run_sweep, throw_needles};

use crate::output::{self, OutputFormat};

/// Use the given seed, or draw and log a fresh one so the run can be
/// reproduced.
fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed = rand::rng().random();
            tracing::info!(seed, "no seed given, drew a random one");
            seed
        }
    }
}

#[derive(Args, Debug)]
pub struct NeedlesArgs {
    /// Number of needles to drop
    #[arg(short = 'n', long, default_value_t = 1_000)]
    needles: u64,

    /// Grid line spacing
    #[arg(short = 'd', long, default_value_t = 1.0)]
    spacing: f64,

    /// Needle length
    #[arg(short = 'l', long, default_value_t = 0.5)]
    needle_len: f64,

    /// RNG seed; a random seed is drawn (and logged) when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

pub fn needles(args: &NeedlesArgs) -> color_eyre::Result<()> {
    let experiment = Experiment::new(args.spacing, args.needle_len)?;
    let seed = resolve_seed(args.seed);

    let field = throw_needles(&experiment, args.needles, seed)?;
    let result = field.trial_result();
    tracing::info!(
        needles = result.needle_count,
        crossings = result.crossing_count,
        estimate = ?result.estimate,
        "needle field complete"
    );

    output::write_needles(&mut io::stdout().lock(), &field, args.format)?;
    Ok(())
}

#[derive(Args, Debug)]
pub struct ConvergeArgs {
    /// Explicit needle counts, comma separated (overrides the range)
    #[arg(long, value_delimiter = ',')]
    counts: Option<Vec<u64>>,

    /// First needle count of the range
    #[arg(long, default_value_t = 100)]
    start: u64,

    /// End of the range (exclusive)
    #[arg(long, default_value_t = 100_000)]
    stop: u64,

    /// Step between needle counts
    #[arg(long, default_value_t = 100)]
    step: u64,

    /// Independent trials per needle count
    #[arg(short, long, default_value_t = 1)]
    repetitions: u32,

    /// Grid line spacing
    #[arg(short = 'd', long, default_value_t = 1.0)]
    spacing: f64,

    /// Needle length
    #[arg(short = 'l', long, default_value_t = 0.5)]
    needle_len: f64,

    /// RNG seed; a random seed is drawn (and logged) when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

impl ConvergeArgs {
    fn sweep_config(&self, seed: u64) -> color_eyre::Result<SweepConfig> {
        let mut builder = SweepConfig::builder()
            .spacing(self.spacing)
            .needle_len(self.needle_len)
            .repetitions(self.repetitions)
            .seed(seed);
        builder = match &self.counts {
            Some(counts) => builder.counts(counts.iter().copied()),
            None => builder.count_range(self.start, self.stop, self.step),
        };
        Ok(builder.build()?)
    }
}

pub fn converge(args: &ConvergeArgs) -> color_eyre::Result<()> {
    let seed = resolve_seed(args.seed);
    let config = args.sweep_config(seed)?;

    let sweep = run_sweep(&config)?;
    let points = sweep.cumulative();
    if let Some(last) = points.last() {
        tracing::info!(
            needles = last.needle_count,
            estimate = last.estimate,
            error = (last.estimate - PI).abs(),
            "sweep complete"
        );
    } else {
        tracing::warn!("no trial in the sweep recorded a crossing");
    }

    output::write_cumulative(&mut io::stdout().lock(), &points, args.format)?;
    Ok(())
}

#[derive(Args, Debug)]
pub struct GroupsArgs {
    /// Needle counts to bucket, comma separated
    #[arg(long, value_delimiter = ',', default_value = "50")]
    counts: Vec<u64>,

    /// Independent trials per needle count
    #[arg(short, long, default_value_t = 20)]
    repetitions: u32,

    /// Grid line spacing
    #[arg(short = 'd', long, default_value_t = 1.0)]
    spacing: f64,

    /// Needle length
    #[arg(short = 'l', long, default_value_t = 0.5)]
    needle_len: f64,

    /// RNG seed; a random seed is drawn (and logged) when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

pub fn groups(args: &GroupsArgs) -> color_eyre::Result<()> {
    let seed = resolve_seed(args.seed);
    let config = SweepConfig::builder()
        .spacing(args.spacing)
        .needle_len(args.needle_len)
        .counts(args.counts.iter().copied())
        .repetitions(args.repetitions)
        .seed(seed)
        .build()?;

    let sweep = run_sweep(&config)?;
    let buckets = sweep.grouped();
    tracing::info!(
        buckets = buckets.len(),
        undefined = sweep.undefined_trials(),
        "grouped sweep complete"
    );

    output::write_groups(&mut io::stdout().lock(), &buckets, args.format)?;
    Ok(())
}
