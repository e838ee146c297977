//! Timeline isolation and timing extraction.
//!
//! Rounds are measured interleaved: between two invocations of one function,
//! every other function runs once. Isolation removes that cross-function
//! time, producing a timeline per function as if it had been benchmarked
//! alone: the first begin sits at zero and every subsequent begin equals the
//! previous end, while each invocation keeps its measured duration exactly.

use serde::Serialize;

use crate::log::SampleLog;
use crate::types::Stamp;

/// A duration placed at the isolated-timeline instant it was observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimedObservation {
    /// Isolated end time of the invocation, in milliseconds.
    pub time: f64,
    /// Measured duration of the invocation, in milliseconds.
    pub duration: f64,
}

/// Isolate one function's stamp column.
///
/// The result is perfectly back-to-back: `out[0].begin == 0.0` and
/// `out[k].begin == out[k - 1].end` for every k >= 1. Durations are carried
/// over from the input, so isolation changes *when* an invocation sits on
/// the timeline, never how long it took. Applying it to an already
/// back-to-back timeline starting at zero is the identity.
pub fn isolate_series(series: &[Stamp]) -> Vec<Stamp> {
    let mut isolated = Vec::with_capacity(series.len());
    let mut cursor = 0.0;
    for stamp in series {
        let end = cursor + stamp.elapsed();
        isolated.push(Stamp::new(cursor, end));
        cursor = end;
    }
    isolated
}

/// Isolate every function's timeline in the log.
pub fn isolate(log: &SampleLog) -> Vec<Vec<Stamp>> {
    (0..log.function_count())
        .map(|index| isolate_series(&log.series(index)))
        .collect()
}

/// Elementwise durations of a stamp sequence, raw or isolated.
pub fn timing_series(series: &[Stamp]) -> Vec<f64> {
    series.iter().map(Stamp::elapsed).collect()
}

/// Per-function duration series, indexed by round number.
pub fn timings(log: &SampleLog) -> Vec<Vec<f64>> {
    (0..log.function_count())
        .map(|index| timing_series(&log.series(index)))
        .collect()
}

/// Per-function durations paired with their isolated observation times.
///
/// Each observation carries the isolated end time of the invocation that
/// produced it, so series can be plotted against elapsed isolated time
/// rather than round number.
pub fn timings_in_context(log: &SampleLog) -> Vec<Vec<TimedObservation>> {
    (0..log.function_count())
        .map(|index| {
            let series = log.series(index);
            isolate_series(&series)
                .into_iter()
                .map(|stamp| TimedObservation {
                    time: stamp.end,
                    duration: stamp.elapsed(),
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolate_removes_gaps() {
        // Two rounds with 3 ms of foreign time between them.
        let series = vec![Stamp::new(10.0, 12.0), Stamp::new(15.0, 18.0)];
        let isolated = isolate_series(&series);

        assert_eq!(isolated, vec![Stamp::new(0.0, 2.0), Stamp::new(2.0, 5.0)]);
    }

    #[test]
    fn test_isolate_empty_series() {
        assert!(isolate_series(&[]).is_empty());
    }

    #[test]
    fn test_single_round_starts_at_zero() {
        let isolated = isolate_series(&[Stamp::new(7.0, 9.5)]);
        assert_eq!(isolated, vec![Stamp::new(0.0, 2.5)]);
    }

    #[test]
    fn test_timings_ignore_placement() {
        let series = vec![Stamp::new(10.0, 12.0), Stamp::new(15.0, 18.0)];
        assert_eq!(timing_series(&series), vec![2.0, 3.0]);
        assert_eq!(timing_series(&isolate_series(&series)), vec![2.0, 3.0]);
    }

    #[test]
    fn test_in_context_uses_isolated_time() {
        let names = vec!["only".to_string()];
        let log = SampleLog::with_rounds(
            names,
            vec![vec![Stamp::new(5.0, 7.0)], vec![Stamp::new(11.0, 14.0)]],
        );

        let context = timings_in_context(&log);
        assert_eq!(
            context[0],
            vec![
                TimedObservation {
                    time: 2.0,
                    duration: 2.0
                },
                TimedObservation {
                    time: 5.0,
                    duration: 3.0
                },
            ]
        );
    }
}
