//! # rondo
//!
//! Interleaved round-robin benchmarking with continuously updated
//! statistical comparison of latency distributions.
//!
//! `rondo` repeatedly times a set of candidate functions, one round-robin
//! round at a time, and periodically compares their latency distributions:
//! bootstrap resampling, pairwise normalized Kolmogorov-Smirnov distances,
//! and expanding-window quantiles. An efficiency governor bounds how much
//! wall-clock time goes to analysis instead of measurement.
//!
//! Measurement records raw begin/end stamps per invocation; the isolation
//! step removes cross-function time afterwards, recovering each function's
//! latency timeline as if it had run alone. Durations are preserved exactly
//! — isolation only moves invocations on the timeline.
//!
//! ## Quick start
//!
//! ```no_run
//! use rondo::{Bench, Candidate, CancelToken, TerminalRender};
//!
//! let cancel = CancelToken::new();
//! // Wire `cancel.cancel()` to your interrupt handling, then:
//! let outcome = Bench::new()
//!     .efficiency(0.9)
//!     .run(
//!         vec![
//!             Candidate::new("hashmap", || { /* code under test */ }),
//!             Candidate::new("btreemap", || { /* code under test */ }),
//!         ],
//!         &mut TerminalRender::new(),
//!         &cancel,
//!     )
//!     .unwrap();
//!
//! // The full sample log survives cancellation and can seed a later session.
//! let log = outcome.into_log();
//! ```
//!
//! The loop executes candidates strictly sequentially — parallel execution
//! would corrupt the isolation model. Candidate panics propagate without
//! retry; analysis failures only degrade the display.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bench;
mod config;
mod constants;
mod error;
mod log;
mod measurement;
mod palette;
mod report;
mod types;

pub mod analysis;
pub mod output;
pub mod statistics;

pub use bench::{Bench, Outcome};
pub use config::Config;
pub use constants::{KS_ALPHAS, KS_THRESHOLDS, QUARTILES};
pub use error::{Error, Result};
pub use log::SampleLog;
pub use measurement::{CancelToken, Candidate};
pub use output::{NullRender, Render, TerminalRender};
pub use palette::{colors, MAX_FUNCTIONS};
pub use report::{Counters, Report};
pub use types::{Round, Stamp, Vector5};
