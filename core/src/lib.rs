//! Core of the math-skills analyzer.
//!
//! Numbers are read by the [`loader`], reduced to four descriptive statistics
//! by the [`math`] engine and rendered by the [`report`] module.

pub mod loader;
pub mod math;
pub mod prelude;
pub mod report;
pub mod telemetry;

pub use prelude::{SampleSet, Statistics, StatsError, StatsResult};
