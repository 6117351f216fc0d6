//! Writers that render the core's numeric data as tables, CSV, or JSON.
//!
//! Tables are for reading in a terminal; CSV carries the raw values a
//! plotting tool consumes; JSON serializes the full result structures.

use std::io::Write;

use clap::ValueEnum;

use buffon_core::{CumulativePoint, GroupBucket, NeedleField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

/// Emit a needle field as segment endpoints plus the crossing outcome.
pub fn write_needles<W: Write>(
    w: &mut W,
    field: &NeedleField,
    format: OutputFormat,
) -> color_eyre::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(
                w,
                "{:>12} {:>12} {:>12} {:>12}  crosses",
                "x1", "y1", "x2", "y2"
            )?;
            for thrown in &field.throws {
                let (a, b) = thrown.needle.endpoints(field.experiment.needle_len());
                writeln!(
                    w,
                    "{:>12.6} {:>12.6} {:>12.6} {:>12.6}  {}",
                    a.x,
                    a.y,
                    b.x,
                    b.y,
                    if thrown.crosses { "yes" } else { "no" }
                )?;
            }
        }
        OutputFormat::Csv => {
            writeln!(w, "x1,y1,x2,y2,crosses")?;
            for thrown in &field.throws {
                let (a, b) = thrown.needle.endpoints(field.experiment.needle_len());
                writeln!(w, "{},{},{},{},{}", a.x, a.y, b.x, b.y, thrown.crosses)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, field)?;
            writeln!(w)?;
        }
    }
    Ok(())
}

/// Emit the cumulative view as `(needle count, running estimate)` pairs.
pub fn write_cumulative<W: Write>(
    w: &mut W,
    points: &[CumulativePoint],
    format: OutputFormat,
) -> color_eyre::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(w, "{:>12}  {:>10}", "needles", "estimate")?;
            for point in points {
                writeln!(w, "{:>12}  {:>10.6}", point.needle_count, point.estimate)?;
            }
        }
        OutputFormat::Csv => {
            writeln!(w, "needles,estimate")?;
            for point in points {
                writeln!(w, "{},{}", point.needle_count, point.estimate)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, points)?;
            writeln!(w)?;
        }
    }
    Ok(())
}

/// Emit the grouped view.
///
/// The table shows per-bucket summary statistics; CSV emits the raw
/// estimates (one row per defined trial) for distribution plots; JSON
/// serializes the buckets whole, undefined counts included.
pub fn write_groups<W: Write>(
    w: &mut W,
    buckets: &[GroupBucket],
    format: OutputFormat,
) -> color_eyre::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(
                w,
                "{:>12} {:>7} {:>9} {:>10} {:>10} {:>10} {:>10}",
                "needles", "trials", "undefined", "mean", "std_dev", "min", "max"
            )?;
            for bucket in buckets {
                match bucket.statistics() {
                    Some(stats) => writeln!(
                        w,
                        "{:>12} {:>7} {:>9} {:>10.6} {:>10.6} {:>10.6} {:>10.6}",
                        bucket.needle_count,
                        stats.trials,
                        bucket.undefined_trials,
                        stats.mean,
                        stats.std_dev,
                        stats.min,
                        stats.max
                    )?,
                    None => writeln!(
                        w,
                        "{:>12} {:>7} {:>9} {:>10} {:>10} {:>10} {:>10}",
                        bucket.needle_count, 0, bucket.undefined_trials, "-", "-", "-", "-"
                    )?,
                }
            }
        }
        OutputFormat::Csv => {
            writeln!(w, "needles,estimate")?;
            for bucket in buckets {
                for estimate in &bucket.estimates {
                    writeln!(w, "{},{}", bucket.needle_count, estimate)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, buckets)?;
            writeln!(w)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use buffon_core::{Experiment, SweepConfig, run_sweep, throw_needles};

    #[test]
    fn cumulative_csv_has_one_row_per_point() {
        let points = vec![
            CumulativePoint {
                needle_count: 10,
                estimate: 3.0,
            },
            CumulativePoint {
                needle_count: 110,
                estimate: 3.2,
            },
        ];
        let mut out = Vec::new();
        write_cumulative(&mut out, &points, OutputFormat::Csv).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "needles,estimate\n10,3\n110,3.2\n");
    }

    #[test]
    fn needles_csv_has_header_and_rows() {
        let experiment = Experiment::new(1.0, 0.5).unwrap();
        let field = throw_needles(&experiment, 3, 1).unwrap();
        let mut out = Vec::new();
        write_needles(&mut out, &field, OutputFormat::Csv).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "x1,y1,x2,y2,crosses");
    }

    #[test]
    fn groups_table_includes_every_bucket() {
        let config = SweepConfig::builder()
            .counts([10, 100])
            .repetitions(5)
            .seed(2)
            .build()
            .unwrap();
        let buckets = run_sweep(&config).unwrap().grouped();

        let mut out = Vec::new();
        write_groups(&mut out, &buckets, OutputFormat::Table).unwrap();
        let text = String::from_utf8(out).unwrap();
        // header plus one row per bucket
        assert_eq!(text.lines().count(), 1 + buckets.len());
    }
}
