//! Candidate invocation and round measurement.
//!
//! Candidates run strictly sequentially, round-robin, one stamp per
//! invocation from a monotonic session clock. Nothing here runs in
//! parallel: the isolation model depends on back-to-back sequential
//! execution within a round.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::types::{Round, Stamp};

/// A function under measurement: an opaque name plus a zero-argument body.
///
/// The core only measures wall-clock duration of `body`; return values are
/// discarded and panics propagate (an unstable candidate terminates the
/// session without retry).
pub struct Candidate {
    name: String,
    body: Box<dyn FnMut()>,
}

impl Candidate {
    /// Wrap a closure or function pointer as a candidate.
    pub fn new(name: impl Into<String>, body: impl FnMut() + 'static) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    /// The candidate's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn invoke(&mut self) {
        (self.body)()
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Cooperative cancellation signal, polled between rounds.
///
/// Clone the token and hand it to whatever delivers the interrupt (signal
/// handler, test harness, UI thread); the measurement loop checks it before
/// starting each round, so a cancelled session never records a partial
/// round.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Monotonic clock producing session-relative millisecond stamps.
///
/// When a session resumes a previous log, the clock is offset so new stamps
/// continue after the resumed log's last end, keeping rounds ordered across
/// sessions.
#[derive(Debug)]
pub(crate) struct SessionClock {
    start: Instant,
    offset_ms: f64,
}

impl SessionClock {
    pub(crate) fn new(offset_ms: f64) -> Self {
        Self {
            start: Instant::now(),
            offset_ms,
        }
    }

    pub(crate) fn now_ms(&self) -> f64 {
        self.offset_ms + self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Run every candidate once, in order, returning the round's stamps.
///
/// A round is atomic from the caller's perspective: it is only appended to
/// the log once all candidates have returned.
pub(crate) fn run_round(clock: &SessionClock, candidates: &mut [Candidate]) -> Round {
    let mut round = Vec::with_capacity(candidates.len());
    for candidate in candidates.iter_mut() {
        let begin = clock.now_ms();
        candidate.invoke();
        let end = clock.now_ms();
        round.push(Stamp::new(begin, end));
    }
    round
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_cancel_token_round_trip() {
        let token = CancelToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());
        token.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn test_round_is_sequential_and_ordered() {
        let clock = SessionClock::new(0.0);
        let mut candidates = vec![
            Candidate::new("first", || {
                std::hint::black_box(vec![0u8; 256]);
            }),
            Candidate::new("second", || {
                std::hint::black_box((0..100).sum::<u64>());
            }),
        ];
        let round = run_round(&clock, &mut candidates);

        assert_eq!(round.len(), 2);
        for stamp in &round {
            assert!(stamp.end >= stamp.begin);
        }
        // Sequential round-robin: second begins after first ends.
        assert!(round[1].begin >= round[0].end);
    }

    #[test]
    fn test_clock_offset_applies() {
        let clock = SessionClock::new(500.0);
        assert!(clock.now_ms() >= 500.0);
    }

    #[test]
    fn test_candidates_invoked_once_per_round() {
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = counter.clone();
        let clock = SessionClock::new(0.0);
        let mut candidates = vec![Candidate::new("counting", move || {
            seen.fetch_add(1, Ordering::Relaxed);
        })];

        run_round(&clock, &mut candidates);
        run_round(&clock, &mut candidates);
        assert_eq!(counter.load(Ordering::Relaxed), 2);
    }
}
