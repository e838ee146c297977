//! Analysis pipeline over a sample log snapshot.
//!
//! 1. **Isolation** ([`isolate`]): remove cross-function time from each
//!    function's timeline
//! 2. **Timing extraction** ([`timings`]): per-function duration series
//! 3. **Bootstrap resampling** ([`bucket_resample`]): synthetic aggregate
//!    distributions
//! 4. **K-S comparison** ([`ComparisonMatrix`]): pairwise normalized
//!    distances, raw and resampled
//! 5. **Cumulative quantiles**: expanding-window summaries per function
//!
//! Every step is a pure function of the snapshot; nothing here mutates the
//! log.

mod isolate;
mod ks;
mod resample;

pub use isolate::{
    isolate, isolate_series, timing_series, timings, timings_in_context, TimedObservation,
};
pub use ks::{ks_statistic, ks_z, ComparisonMatrix};
pub use resample::{bucket_resample, bucket_resample_with, mean};

use rand::Rng;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::log::SampleLog;
use crate::report::{Counters, Report};
use crate::statistics::{cumulative_quantiles, describe};

/// Run the full pipeline over a log snapshot.
///
/// Fails with [`Error::InsufficientData`] on an empty log; the scheduler
/// treats any failure here as display degradation, not a loop error.
pub fn analyze<R: Rng>(
    log: &SampleLog,
    config: &Config,
    colors: &[&'static str],
    counters: Counters,
    rng: &mut R,
) -> Result<Report> {
    if log.is_empty() {
        return Err(Error::InsufficientData {
            required: 1,
            available: 0,
        });
    }

    let isolated = isolate(log);
    let timings = timings(log);

    let summaries = timings
        .iter()
        .map(|series| {
            describe(series).ok_or(Error::InsufficientData {
                required: 1,
                available: 0,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let ks = ComparisonMatrix::compute(log.names(), &timings);

    let bucketed = timings
        .iter()
        .map(|series| bucket_resample(rng, series, config.sample_size, config.trials))
        .collect::<Result<Vec<_>>>()?;
    let ks_bucketed = ComparisonMatrix::compute(log.names(), &bucketed);

    let quantiles = timings
        .iter()
        .zip(&isolated)
        .map(|(durations, timeline)| cumulative_quantiles(durations, timeline))
        .collect();

    let in_context = timings_in_context(log);

    Ok(Report {
        names: log.names().to_vec(),
        colors: colors.to_vec(),
        timings,
        summaries,
        ks,
        ks_bucketed,
        quantiles,
        in_context,
        counters,
    })
}
