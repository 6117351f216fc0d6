use std::fmt;

/// Errors raised when experiment or sweep parameters fail validation.
///
/// Raised before any needles are generated; none of these are recoverable
/// inside the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// The short-needle model requires `needle_len <= spacing` so a needle
    /// can cross at most one line.
    NeedleLongerThanSpacing { needle_len: f64, spacing: f64 },
    NonPositiveSpacing(f64),
    NonPositiveNeedleLength(f64),
    ZeroNeedleCount,
    ZeroRepetitions,
    EmptyCountList,
    /// Needle counts must be non-decreasing so the cumulative view grows
    /// with the sequence.
    DecreasingCounts {
        index: usize,
        previous: u64,
        current: u64,
    },
    InvalidDistribution {
        what: &'static str,
        low: f64,
        high: f64,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NeedleLongerThanSpacing { needle_len, spacing } => {
                write!(
                    f,
                    "needle length {needle_len} exceeds line spacing {spacing}"
                )
            }
            ParameterError::NonPositiveSpacing(spacing) => {
                write!(f, "line spacing must be a positive finite number, got {spacing}")
            }
            ParameterError::NonPositiveNeedleLength(len) => {
                write!(f, "needle length must be a positive finite number, got {len}")
            }
            ParameterError::ZeroNeedleCount => write!(f, "needle count must be at least 1"),
            ParameterError::ZeroRepetitions => write!(f, "repetition count must be at least 1"),
            ParameterError::EmptyCountList => write!(f, "sweep needs at least one needle count"),
            ParameterError::DecreasingCounts {
                index,
                previous,
                current,
            } => {
                write!(
                    f,
                    "needle counts must be non-decreasing: count {current} at index {index} follows {previous}"
                )
            }
            ParameterError::InvalidDistribution { what, low, high } => {
                write!(f, "cannot build uniform {what} distribution over [{low}, {high}]")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

pub type Result<T> = std::result::Result<T, ParameterError>;

/// A trial recorded zero crossings, so the ratio estimate `2·l·N / (d·C)`
/// is undefined.
///
/// This is a signal, not a fatal failure: trial results carry the undefined
/// state as `None` and only [`TrialResult::require_estimate`] turns it into
/// this error. The caller decides whether to retry, skip, or report a
/// missing data point.
///
/// [`TrialResult::require_estimate`]: crate::model::TrialResult::require_estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndefinedEstimate {
    /// How many needles the trial dropped without a single crossing.
    pub needle_count: u64,
}

impl fmt::Display for UndefinedEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "trial of {} needles produced no crossings; the estimate is undefined",
            self.needle_count
        )
    }
}

impl std::error::Error for UndefinedEstimate {}
