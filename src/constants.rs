//! Shared constants for measurement and analysis defaults.

/// Quantile probabilities for the five-point summary: min, p25, median, p75, max.
pub const QUARTILES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Normalized K-S statistic thresholds, ascending.
///
/// A Z value exceeding `KS_THRESHOLDS[i]` corresponds to confidence level
/// `KS_ALPHAS[i]` that the two distributions differ. Informational only;
/// nothing in the crate enforces these.
pub const KS_THRESHOLDS: [f64; 6] = [1.22, 1.36, 1.48, 1.63, 1.73, 1.95];

/// Confidence levels matching `KS_THRESHOLDS` position by position.
pub const KS_ALPHAS: [f64; 6] = [0.10, 0.05, 0.025, 0.01, 0.005, 0.001];

/// Rounds collected before any analysis is attempted.
pub const DEFAULT_WARMUP_ROUNDS: usize = 10;

/// Target fraction of wall-clock time spent running candidates.
pub const DEFAULT_EFFICIENCY: f64 = 0.9;

/// Draws per synthetic bootstrap sample.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Synthetic samples produced per bootstrap run.
pub const DEFAULT_TRIALS: usize = 1000;
