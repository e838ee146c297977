//! Append-only storage of measurement rounds.
//!
//! A [`SampleLog`] records one [`Round`] per entry: a begin/end stamp for
//! every candidate function, in the fixed function order chosen at session
//! start. The log is the single source of truth for a session; everything
//! else (isolated timelines, timing series, comparison matrices, quantile
//! tables) is recomputed on demand from a snapshot and carries no state of
//! its own.

use serde::{Deserialize, Serialize};

use crate::types::{Round, Stamp};

/// Ordered, append-only sequence of measurement rounds.
///
/// Rounds are stored in temporal order of measurement. A log seeded from
/// previously collected data treats the seed as rounds `0..k-1`; derived
/// computations cannot distinguish a resumed log from one collected in a
/// single session with the same stamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleLog {
    names: Vec<String>,
    rounds: Vec<Round>,
}

impl SampleLog {
    /// Create an empty log for the given function slots.
    ///
    /// Duplicate names are permitted; slots are identified by order index.
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            rounds: Vec::new(),
        }
    }

    /// Create a log seeded with previously collected rounds.
    ///
    /// The seeded rounds keep their relative order and become rounds
    /// `0..rounds.len()`.
    pub fn with_rounds(names: Vec<String>, rounds: Vec<Round>) -> Self {
        debug_assert!(
            rounds.iter().all(|r| r.len() == names.len()),
            "every round must have one stamp per function slot"
        );
        Self { names, rounds }
    }

    /// Append one round.
    ///
    /// The round must hold exactly one stamp per function slot, in function
    /// order.
    pub fn append(&mut self, round: Round) {
        debug_assert_eq!(
            round.len(),
            self.names.len(),
            "round length must match function count"
        );
        self.rounds.push(round);
    }

    /// Number of rounds recorded so far.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Whether the log holds no rounds.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Function names in invocation order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of function slots per round.
    pub fn function_count(&self) -> usize {
        self.names.len()
    }

    /// All rounds, in temporal order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// The ordered stamp column for function slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the function slots.
    pub fn series(&self, index: usize) -> Vec<Stamp> {
        assert!(index < self.names.len(), "function index out of range");
        self.rounds.iter().map(|round| round[index]).collect()
    }

    /// An owned, immutable copy safe to analyze while new rounds are appended.
    pub fn snapshot(&self) -> SampleLog {
        self.clone()
    }
}
