//! Analysis result handed to renderers.
//!
//! A [`Report`] is a pure function of a [`SampleLog`](crate::SampleLog)
//! snapshot plus the analysis configuration: the scheduler rebuilds it from
//! scratch on every analysis pass and hands it to the renderer, which owns
//! all presentation state.

use serde::Serialize;

use crate::analysis::{ComparisonMatrix, TimedObservation};
use crate::log::SampleLog;
use crate::statistics::{QuantileRow, Summary};

/// Session-level counters displayed alongside the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Counters {
    /// Rounds in the log, including resumed rounds.
    pub rounds: usize,
    /// Wall-clock seconds since this session started.
    pub elapsed_secs: f64,
    /// Newly collected rounds per wall-clock second.
    pub samples_per_sec: f64,
    /// Percentage of wall-clock time spent inside candidate functions.
    pub efficiency_pct: f64,
}

impl Counters {
    /// Compute counters for a log, given the round count present at session
    /// start and the elapsed wall-clock seconds.
    pub fn compute(log: &SampleLog, initial_rounds: usize, elapsed_secs: f64) -> Self {
        let rounds = log.len();
        let fresh = rounds.saturating_sub(initial_rounds);

        // Time actually spent in candidates this session, in seconds.
        let bench_ms: f64 = log.rounds()[initial_rounds.min(rounds)..]
            .iter()
            .flat_map(|round| round.iter().map(|stamp| stamp.elapsed()))
            .sum();

        let (samples_per_sec, efficiency_pct) = if elapsed_secs > 0.0 {
            (
                fresh as f64 / elapsed_secs,
                100.0 * (bench_ms / 1000.0) / elapsed_secs,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            rounds,
            elapsed_secs,
            samples_per_sec,
            efficiency_pct,
        }
    }
}

/// Everything one analysis pass produces.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Function names in invocation order.
    pub names: Vec<String>,
    /// One display color per function slot.
    pub colors: Vec<&'static str>,
    /// Per-function duration series, indexed by round number.
    pub timings: Vec<Vec<f64>>,
    /// Descriptive statistics per function.
    pub summaries: Vec<Summary>,
    /// Normalized K-S distances over the raw timing series.
    pub ks: ComparisonMatrix,
    /// Normalized K-S distances over bootstrap-resampled series.
    pub ks_bucketed: ComparisonMatrix,
    /// Expanding-window quantile table per function.
    pub quantiles: Vec<Vec<QuantileRow>>,
    /// Durations placed at their isolated observation times, per function.
    pub in_context: Vec<Vec<TimedObservation>>,
    /// Session counters.
    pub counters: Counters,
}

impl Report {
    /// One-line headline in the original tool's title format.
    pub fn headline(&self) -> String {
        format!(
            "{} samples, {:.2} sec elapsed, {:.2} samples/sec, {:.2}% efficiency",
            self.counters.rounds,
            self.counters.elapsed_secs,
            self.counters.samples_per_sec,
            self.counters.efficiency_pct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stamp;

    fn two_round_log() -> SampleLog {
        SampleLog::with_rounds(
            vec!["f".to_string()],
            vec![
                vec![Stamp::new(0.0, 500.0)],
                vec![Stamp::new(500.0, 1500.0)],
            ],
        )
    }

    #[test]
    fn test_counters_efficiency() {
        // 1.5 s of measured time over 2 s of wall clock.
        let counters = Counters::compute(&two_round_log(), 0, 2.0);
        assert_eq!(counters.rounds, 2);
        assert_eq!(counters.samples_per_sec, 1.0);
        assert!((counters.efficiency_pct - 75.0).abs() < 1e-12);
    }

    #[test]
    fn test_counters_exclude_resumed_rounds() {
        let counters = Counters::compute(&two_round_log(), 1, 2.0);
        assert_eq!(counters.rounds, 2);
        assert_eq!(counters.samples_per_sec, 0.5);
        // Only the second round's 1.0 s counts as this session's bench time.
        assert!((counters.efficiency_pct - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_counters_zero_elapsed() {
        let counters = Counters::compute(&two_round_log(), 0, 0.0);
        assert_eq!(counters.samples_per_sec, 0.0);
        assert_eq!(counters.efficiency_pct, 0.0);
    }
}
