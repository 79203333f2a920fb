use crate::prelude::{SampleSet, StatsError, StatsResult};
use crate::telemetry::log::LogManager;
use std::fs;
use std::path::Path;

/// Reads newline-separated numeric literals into a [`SampleSet`].
pub struct SampleLoader;

impl SampleLoader {
    pub fn load<P: AsRef<Path>>(path: P) -> StatsResult<SampleSet> {
        let path_ref = path.as_ref();
        let logger = LogManager::new("loader");
        if logger.enabled() {
            logger.record(&format!("reading {}", path_ref.display()));
        }

        let contents = fs::read_to_string(path_ref).map_err(|source| StatsError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        Self::parse_with(&contents, &logger)
    }

    /// Parses one value per line, skipping blank lines. Stops at the first
    /// line that is not a finite number.
    pub fn parse(text: &str) -> StatsResult<SampleSet> {
        Self::parse_with(text, &LogManager::new("loader"))
    }

    fn parse_with(text: &str, logger: &LogManager) -> StatsResult<SampleSet> {
        let mut samples = SampleSet::new();
        let mut skipped = 0usize;

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                skipped += 1;
                continue;
            }
            let value: f64 = line.parse().map_err(|source| StatsError::Parse {
                line: index + 1,
                content: line.to_string(),
                source,
            })?;
            if !value.is_finite() {
                return Err(StatsError::NonFinite {
                    line: index + 1,
                    content: line.to_string(),
                });
            }
            samples.push(value);
        }

        if logger.enabled() {
            logger.record(&format!(
                "parsed {} values, skipped {} blank lines",
                samples.len(),
                skipped
            ));
        }
        Ok(samples)
    }
}
