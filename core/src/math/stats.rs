use crate::prelude::{Statistics, StatsError, StatsResult};
use crate::telemetry::log::LogManager;

/// Stateless descriptive-statistics operations over a sample set.
pub struct StatsHelper;

impl StatsHelper {
    pub fn average(samples: &[f64]) -> StatsResult<f64> {
        if samples.is_empty() {
            return Err(StatsError::EmptyDataset);
        }
        let sum: f64 = samples.iter().sum();
        Ok(sum / samples.len() as f64)
    }

    /// Returns a non-decreasing copy of `samples`, leaving the input untouched.
    pub fn sorted(samples: &[f64]) -> Vec<f64> {
        let mut sorted = samples.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);
        sorted
    }

    /// Median of an already sorted sequence.
    pub fn median(sorted: &[f64]) -> StatsResult<f64> {
        let length = sorted.len();
        if length == 0 {
            return Err(StatsError::EmptyDataset);
        }
        let middle = length / 2;
        if length % 2 == 0 {
            Ok((sorted[middle - 1] + sorted[middle]) / 2.0)
        } else {
            Ok(sorted[middle])
        }
    }

    /// Population variance (divisor `n`) around a precomputed average.
    pub fn variance(samples: &[f64], average: f64) -> StatsResult<f64> {
        if samples.is_empty() {
            return Err(StatsError::EmptyDataset);
        }
        let sum_sq: f64 = samples
            .iter()
            .map(|&v| {
                let diff = v - average;
                diff * diff
            })
            .sum();
        Ok(sum_sq / samples.len() as f64)
    }

    /// Square root of `variance`; NaN for a negative input.
    pub fn standard_deviation(variance: f64) -> f64 {
        variance.sqrt()
    }
}

impl Statistics {
    pub fn compute(samples: &[f64]) -> StatsResult<Self> {
        let logger = LogManager::new("stats");

        let average = StatsHelper::average(samples)?;
        let sorted = StatsHelper::sorted(samples);
        let median = StatsHelper::median(&sorted)?;
        let variance = StatsHelper::variance(samples, average)?;
        let standard_deviation = StatsHelper::standard_deviation(variance);

        if logger.enabled() {
            logger.record(&format!(
                "n={} average={} median={} variance={} stddev={}",
                samples.len(),
                average,
                median,
                variance,
                standard_deviation
            ));
        }

        Ok(Self {
            average,
            median,
            variance,
            standard_deviation,
        })
    }
}
