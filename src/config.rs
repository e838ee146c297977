//! Configuration for the adaptive benchmarking loop.

use crate::constants::{
    DEFAULT_EFFICIENCY, DEFAULT_SAMPLE_SIZE, DEFAULT_TRIALS, DEFAULT_WARMUP_ROUNDS,
};
use crate::error::{Error, Result};

/// Configuration options for a [`Bench`](crate::Bench) session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target fraction of wall-clock time spent running candidate functions.
    ///
    /// The loop spends up to `1 - efficiency` of its time analyzing and
    /// rendering. Must lie in the open interval (0, 1). Default: 0.9.
    pub efficiency: f64,

    /// Rounds collected before the first analysis is attempted.
    ///
    /// Early analysis on a handful of rounds is noise; this threshold keeps
    /// the loop measuring until the series are worth looking at.
    /// Default: 10.
    pub warmup_rounds: usize,

    /// Optional upper bound on total rounds (including resumed rounds).
    ///
    /// When reached the loop returns [`Outcome::Completed`](crate::Outcome).
    /// `None` runs until cancellation. Default: None.
    pub max_rounds: Option<usize>,

    /// Draws per synthetic bootstrap sample. Default: 10.
    pub sample_size: usize,

    /// Synthetic samples produced per bootstrap run. Default: 1000.
    pub trials: usize,

    /// Seed for the analysis RNG.
    ///
    /// Bootstrap resampling is the only randomized step; fixing the seed
    /// makes analysis output reproducible for a given log. `None` draws a
    /// seed from the thread RNG. Default: None.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            efficiency: DEFAULT_EFFICIENCY,
            warmup_rounds: DEFAULT_WARMUP_ROUNDS,
            max_rounds: None,
            sample_size: DEFAULT_SAMPLE_SIZE,
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl Config {
    /// Check the configuration, returning the first violation found.
    pub fn validate(&self) -> Result<()> {
        if !(self.efficiency > 0.0 && self.efficiency < 1.0) {
            return Err(Error::InvalidEfficiency(self.efficiency));
        }
        if self.sample_size == 0 || self.trials == 0 {
            return Err(Error::InvalidResampleConfig);
        }
        Ok(())
    }
}
