use serde::Serialize;
use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

/// Values parsed from the input, in file order.
pub type SampleSet = Vec<f64>;

/// The four descriptive statistics produced for one sample set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub average: f64,
    pub median: f64,
    pub variance: f64,
    pub standard_deviation: f64,
}

/// Common error type for loading and analysis.
#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: invalid number {content:?}")]
    Parse {
        line: usize,
        content: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("line {line}: non-finite value {content:?}")]
    NonFinite { line: usize, content: String },
    #[error("no data to analyze")]
    EmptyDataset,
}

pub type StatsResult<T> = Result<T, StatsError>;
