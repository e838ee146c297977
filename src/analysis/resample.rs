//! Bootstrap resampling of timing series.
//!
//! A raw timing series is noisy sample by sample. Resampling buckets of it
//! with replacement and aggregating each bucket approximates the sampling
//! distribution of the aggregator (mean-of-10 by default), which compares
//! more robustly across functions than the raw observations.

use rand::Rng;

use crate::error::{Error, Result};

/// Arithmetic mean, the default bucket aggregator.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Bootstrap-resample `series` into `trials` synthetic aggregate values.
///
/// Each trial draws `sample_size` values uniformly at random with
/// replacement from `series` and reduces them with `aggregator`.
///
/// Fails with [`Error::InsufficientData`] on an empty series.
pub fn bucket_resample_with<R, A>(
    rng: &mut R,
    series: &[f64],
    sample_size: usize,
    trials: usize,
    aggregator: A,
) -> Result<Vec<f64>>
where
    R: Rng,
    A: Fn(&[f64]) -> f64,
{
    if series.is_empty() {
        return Err(Error::InsufficientData {
            required: 1,
            available: 0,
        });
    }

    let mut bucket = vec![0.0; sample_size];
    let mut synthetic = Vec::with_capacity(trials);
    for _ in 0..trials {
        for slot in bucket.iter_mut() {
            *slot = series[rng.random_range(0..series.len())];
        }
        synthetic.push(aggregator(&bucket));
    }
    Ok(synthetic)
}

/// [`bucket_resample_with`] using the arithmetic mean as aggregator.
pub fn bucket_resample<R: Rng>(
    rng: &mut R,
    series: &[f64],
    sample_size: usize,
    trials: usize,
) -> Result<Vec<f64>> {
    bucket_resample_with(rng, series, sample_size, trials, mean)
}
