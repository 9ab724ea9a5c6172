use serde::{Deserialize, Serialize};

use super::metrics::{CalibrationSample, brier_score, log_loss, require_samples};
use crate::errors::{ArenaResult, invalid_input};

/// Samples whose predictions fall in `[lower, upper)` (the last bucket includes 1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationBucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    pub mean_expected: f64,
    pub mean_actual: f64,
}

/// How well expected scores matched the observed outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationReport {
    pub sample_count: usize,
    pub brier_score: f64,
    pub log_loss: f64,
    /// Count-weighted mean gap between predicted and observed win rate per bucket
    pub expected_calibration_error: f64,
    /// Non-empty buckets only
    pub buckets: Vec<CalibrationBucket>,
}

impl CalibrationReport {
    pub fn from_samples(samples: &[CalibrationSample], bucket_count: usize) -> ArenaResult<Self> {
        require_samples(samples)?;
        if bucket_count == 0 {
            return Err(invalid_input("bucket_count must be at least 1"));
        }

        let buckets = build_buckets(samples, bucket_count);
        let expected_calibration_error = buckets
            .iter()
            .map(|b| b.count as f64 * (b.mean_expected - b.mean_actual).abs())
            .sum::<f64>()
            / samples.len() as f64;

        Ok(Self {
            sample_count: samples.len(),
            brier_score: brier_score(samples)?,
            log_loss: log_loss(samples)?,
            expected_calibration_error,
            buckets,
        })
    }
}

fn build_buckets(samples: &[CalibrationSample], bucket_count: usize) -> Vec<CalibrationBucket> {
    let mut sums = vec![(0usize, 0.0f64, 0.0f64); bucket_count];

    for sample in samples {
        let slot = bucket_index(sample.expected, bucket_count);
        sums[slot].0 += 1;
        sums[slot].1 += sample.expected;
        sums[slot].2 += sample.actual;
    }

    let width = 1.0 / bucket_count as f64;
    sums.into_iter()
        .enumerate()
        .filter(|(_, (count, _, _))| *count > 0)
        .map(|(idx, (count, expected_sum, actual_sum))| CalibrationBucket {
            lower: idx as f64 * width,
            upper: (idx + 1) as f64 * width,
            count,
            mean_expected: expected_sum / count as f64,
            mean_actual: actual_sum / count as f64,
        })
        .collect()
}

fn bucket_index(expected: f64, bucket_count: usize) -> usize {
    let idx = (expected * bucket_count as f64).floor() as usize;
    idx.min(bucket_count - 1)
}
