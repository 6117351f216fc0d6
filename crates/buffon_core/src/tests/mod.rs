//! Integration tests for the Buffon needle engine
//!
//! Tests are organized by topic:
//! - `config` - Parameter validation and the sweep builder
//! - `geometry` - The crossing predicate and needle geometry
//! - `estimator` - Single-trial estimation, determinism, convergence
//! - `sweep` - Sweep execution and the cumulative/grouped views

mod config;
mod estimator;
