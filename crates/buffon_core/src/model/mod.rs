mod needle;
mod results;

pub use needle::{FieldSampler, Needle, NeedleDrop, NeedleField, NeedleSampler, Point, ThrownNeedle};
pub use results::{SweepResult, SweepTrial, TrialResult};
