//! Type aliases and common types.

use nalgebra::SVector;
use serde::{Deserialize, Serialize};

/// 5-dimensional vector holding a five-point summary (min, p25, median, p75, max).
pub type Vector5 = SVector<f64, 5>;

/// One begin/end timestamp pair, in milliseconds on the session clock.
///
/// The clock is monotonic and session-relative; only differences between
/// stamps are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stamp {
    /// Time at which the invocation started.
    pub begin: f64,
    /// Time at which the invocation returned.
    pub end: f64,
}

impl Stamp {
    /// Create a new stamp.
    pub fn new(begin: f64, end: f64) -> Self {
        Self { begin, end }
    }

    /// Elapsed time of the invocation, in milliseconds.
    pub fn elapsed(&self) -> f64 {
        self.end - self.begin
    }
}

/// One measurement round: a stamp per candidate function, in function order.
pub type Round = Vec<Stamp>;
