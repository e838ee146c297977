//! Error types for benchmark configuration and analysis.

/// Errors surfaced by session setup and the analysis pipeline.
///
/// Configuration errors (`PaletteExhausted`, `NoFunctions`,
/// `InvalidEfficiency`, `ResumeMismatch`) fail fast before any round is
/// measured. `InsufficientData` is raised by analysis steps and is isolated
/// from the measurement loop: it degrades the display, never the collection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// More candidate functions than the palette can distinguish.
    #[error("palette supports at most {available} functions, {requested} requested")]
    PaletteExhausted {
        /// Number of functions the caller asked to benchmark.
        requested: usize,
        /// Number of distinct colors available.
        available: usize,
    },

    /// The candidate list was empty.
    #[error("no candidate functions to benchmark")]
    NoFunctions,

    /// Target efficiency outside the open interval (0, 1).
    #[error("target efficiency must be in (0, 1), got {0}")]
    InvalidEfficiency(f64),

    /// Resample configuration with zero sample size or zero trials.
    #[error("bootstrap resampling requires non-zero sample size and trials")]
    InvalidResampleConfig,

    /// A resumed sample log whose function count does not match the candidates.
    #[error("resumed log has {resumed} function slots, candidates have {candidates}")]
    ResumeMismatch {
        /// Function slots in the resumed log.
        resumed: usize,
        /// Candidate functions supplied to this session.
        candidates: usize,
    },

    /// Not enough samples for the requested statistic.
    #[error("insufficient data: need at least {required} samples, have {available}")]
    InsufficientData {
        /// Minimum number of samples the operation needs.
        required: usize,
        /// Number of samples actually present.
        available: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
