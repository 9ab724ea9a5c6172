//! Checks how well pre-battle expected scores predicted the outcomes.

mod metrics;
mod report;

pub use metrics::{CalibrationSample, brier_score, log_loss};
pub use report::{CalibrationBucket, CalibrationReport};
