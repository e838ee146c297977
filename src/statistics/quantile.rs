//! Quantile computation and expanding-window quantile tables.
//!
//! Quantiles use linear interpolation between order statistics (Type 7 in
//! Hyndman & Fan 1996): for a sorted sample x of size n at probability p,
//!
//! ```text
//! h = (n - 1) * p
//! q = x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])
//! ```

use serde::Serialize;

use crate::constants::QUARTILES;
use crate::types::{Stamp, Vector5};

/// Compute a single quantile from an already sorted slice.
///
/// # Panics
///
/// Panics if `sorted` is empty or `p` is outside [0, 1].
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "quantile probability must be in [0, 1]"
    );

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Compute a single quantile, sorting a copy of the input.
///
/// # Panics
///
/// Panics if `data` is empty or `p` is outside [0, 1].
pub fn quantile(data: &[f64], p: f64) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    quantile_sorted(&sorted, p)
}

/// Five-point summary (min, p25, median, p75, max) of a sorted slice.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn five_point_sorted(sorted: &[f64]) -> Vector5 {
    Vector5::from_fn(|i, _| quantile_sorted(sorted, QUARTILES[i]))
}

/// One row of a cumulative quantile table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuantileRow {
    /// Isolated-timeline end time of the prefix's last round, in milliseconds.
    pub time: f64,
    /// Five-point summary over the prefix: min, p25, median, p75, max.
    pub stats: Vector5,
}

/// Expanding-window five-point summaries for one function.
///
/// Row k summarizes durations `0..=k` and is indexed by the isolated end
/// time of round k, so the table plots against elapsed isolated time rather
/// than round number. Running min is non-increasing and running max
/// non-decreasing as the window expands.
///
/// `durations` and `isolated` must be the same length (duration series and
/// isolated timeline of the same function).
pub fn cumulative_quantiles(durations: &[f64], isolated: &[Stamp]) -> Vec<QuantileRow> {
    cumulative_quantiles_range(durations, isolated, 0, durations.len())
}

/// [`cumulative_quantiles`] restricted to prefix lengths `start + 1..=stop`.
pub fn cumulative_quantiles_range(
    durations: &[f64],
    isolated: &[Stamp],
    start: usize,
    stop: usize,
) -> Vec<QuantileRow> {
    debug_assert_eq!(durations.len(), isolated.len());
    let stop = stop.min(durations.len());

    // Maintain the expanding window as a sorted vector; each step inserts
    // one duration and reads the summary off the sorted prefix.
    let mut window: Vec<f64> = Vec::with_capacity(stop);
    let mut rows = Vec::with_capacity(stop.saturating_sub(start));
    for (k, &duration) in durations[..stop].iter().enumerate() {
        let at = window
            .binary_search_by(|probe| probe.total_cmp(&duration))
            .unwrap_or_else(|pos| pos);
        window.insert(at, duration);
        if k >= start {
            rows.push(QuantileRow {
                time: isolated[k].end,
                stats: five_point_sorted(&window),
            });
        }
    }
    rows
}

/// Descriptive statistics for one timing series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator; 0 for a single sample).
    pub std: f64,
    /// Minimum.
    pub min: f64,
    /// 25th percentile.
    pub p25: f64,
    /// Median.
    pub median: f64,
    /// 75th percentile.
    pub p75: f64,
    /// Maximum.
    pub max: f64,
}

/// Describe a timing series; `None` when it is empty.
pub fn describe(series: &[f64]) -> Option<Summary> {
    if series.is_empty() {
        return None;
    }

    let count = series.len();
    let mean = series.iter().sum::<f64>() / count as f64;
    let std = if count > 1 {
        let var = series.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        var.sqrt()
    } else {
        0.0
    };

    let mut sorted = series.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    let stats = five_point_sorted(&sorted);

    Some(Summary {
        count,
        mean,
        std,
        min: stats[0],
        p25: stats[1],
        median: stats[2],
        p75: stats[3],
        max: stats[4],
    })
}
