//! Isolation and timing-extraction invariants.

use proptest::prelude::*;
use rondo::analysis::{isolate, isolate_series, timing_series, timings};
use rondo::{SampleLog, Stamp};

/// Build a two-function log with constant durations and per-round overhead:
/// fn1 takes 1.1 ms, fn2 takes 1.5 ms, with scheduling gaps around them.
fn constant_duration_log(rounds: usize) -> SampleLog {
    let names = vec!["fn1".to_string(), "fn2".to_string()];
    let mut cursor = 3.0; // session does not start at zero
    let mut data = Vec::with_capacity(rounds);
    for _ in 0..rounds {
        let fn1 = Stamp::new(cursor, cursor + 1.1);
        let fn2 = Stamp::new(fn1.end + 0.05, fn1.end + 0.05 + 1.5);
        data.push(vec![fn1, fn2]);
        cursor = fn2.end + 0.2;
    }
    SampleLog::with_rounds(names, data)
}

#[test]
fn constant_durations_survive_extraction() {
    let log = constant_duration_log(20);
    let series = timings(&log);

    assert_eq!(series[0].len(), 20);
    for &duration in &series[0] {
        assert!((duration - 1.1).abs() < 1e-9);
    }
    for &duration in &series[1] {
        assert!((duration - 1.5).abs() < 1e-9);
    }
}

#[test]
fn isolated_begins_are_perfect_multiples() {
    let log = constant_duration_log(20);
    let isolated = isolate(&log);

    for (k, stamp) in isolated[0].iter().enumerate() {
        assert!((stamp.begin - 1.1 * k as f64).abs() < 1e-9);
        assert!((stamp.end - (1.1 * k as f64 + 1.1)).abs() < 1e-9);
    }
    assert!((isolated[0][19].begin - 20.9).abs() < 1e-9);
}

#[test]
fn durations_preserved_elementwise() {
    let log = constant_duration_log(20);
    let raw = timings(&log);
    let isolated = isolate(&log);

    for (index, timeline) in isolated.iter().enumerate() {
        let iso_durations = timing_series(timeline);
        for (a, b) in iso_durations.iter().zip(&raw[index]) {
            assert!((a - b).abs() < 1e-9);
        }
    }
}

#[test]
fn isolated_timeline_is_back_to_back() {
    let log = constant_duration_log(20);
    for timeline in isolate(&log) {
        assert_eq!(timeline[0].begin, 0.0);
        for pair in timeline.windows(2) {
            assert_eq!(pair[0].end, pair[1].begin);
        }
    }
}

#[test]
fn isolation_is_idempotent_on_gapless_timelines() {
    // Integer-valued stamps keep every operation exact in f64.
    let series = vec![
        Stamp::new(0.0, 4.0),
        Stamp::new(4.0, 9.0),
        Stamp::new(9.0, 11.0),
    ];
    assert_eq!(isolate_series(&series), series);
}

proptest! {
    /// Random interleaved logs with integer-valued durations and gaps, so
    /// every arithmetic step below 2^53 is exact.
    #[test]
    fn isolation_invariants_hold(
        function_count in 1usize..4,
        durations in proptest::collection::vec(
            proptest::collection::vec(1u32..1000, 1..4),
            1..30,
        ),
        gaps in proptest::collection::vec(0u32..100, 1..30),
    ) {
        let names: Vec<String> = (0..function_count).map(|i| format!("f{i}")).collect();
        let mut cursor = 0.0;
        let mut rounds = Vec::new();
        for (round_durations, &gap) in durations.iter().zip(&gaps) {
            let mut round = Vec::with_capacity(function_count);
            for slot in 0..function_count {
                let duration = round_durations[slot % round_durations.len()] as f64;
                let stamp = Stamp::new(cursor, cursor + duration);
                cursor = stamp.end;
                round.push(stamp);
            }
            cursor += gap as f64;
            rounds.push(round);
        }
        let log = SampleLog::with_rounds(names, rounds);

        let raw = timings(&log);
        let isolated = isolate(&log);

        for (index, timeline) in isolated.iter().enumerate() {
            // Duration preservation, exact.
            prop_assert_eq!(&timing_series(timeline), &raw[index]);

            // Back-to-back with zero origin, exact.
            prop_assert_eq!(timeline[0].begin, 0.0);
            for pair in timeline.windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].begin);
            }

            // Idempotence on the already-isolated timeline.
            prop_assert_eq!(&isolate_series(timeline), timeline);
        }
    }
}
