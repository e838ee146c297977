//! The adaptive measurement loop and its builder entry point.
//!
//! A session alternates between two activities: measuring (one round of all
//! candidates, appended atomically to the log) and analyzing (the full
//! pipeline, handed to the renderer). A ratio governor keeps analysis below
//! `1 - efficiency` of elapsed wall-clock time, so almost all time goes to
//! the functions under test.
//!
//! State machine: WARMUP -> MEASURING <-> ANALYZING -> DONE. Warmup is the
//! measuring phase before the round-count threshold; DONE is reached by
//! cancellation (or the optional round cap) and returns the collected log.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::analysis;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::log::SampleLog;
use crate::measurement::{self, CancelToken, Candidate, SessionClock};
use crate::output::Render;
use crate::palette;
use crate::report::Counters;

/// How a session ended, carrying the full collected log.
///
/// Cancellation is the expected termination path, not an error; both
/// variants hold every complete round collected so far, never a partial
/// round.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The configured round cap was reached.
    Completed(SampleLog),
    /// The cancel token was observed between rounds.
    Cancelled(SampleLog),
}

impl Outcome {
    /// The collected log, however the session ended.
    pub fn into_log(self) -> SampleLog {
        match self {
            Outcome::Completed(log) | Outcome::Cancelled(log) => log,
        }
    }

    /// Borrow the collected log.
    pub fn log(&self) -> &SampleLog {
        match self {
            Outcome::Completed(log) | Outcome::Cancelled(log) => log,
        }
    }

    /// Whether the session ended through the cancel token.
    pub fn was_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled(_))
    }
}

/// Builder for a benchmarking session.
///
/// # Example
///
/// ```no_run
/// use rondo::{Bench, Candidate, CancelToken, NullRender};
///
/// let cancel = CancelToken::new();
/// let outcome = Bench::new()
///     .efficiency(0.9)
///     .max_rounds(10_000)
///     .run(
///         vec![
///             Candidate::new("sort", || {
///                 let mut v: Vec<u64> = (0..1000).rev().collect();
///                 v.sort();
///             }),
///             Candidate::new("sort_unstable", || {
///                 let mut v: Vec<u64> = (0..1000).rev().collect();
///                 v.sort_unstable();
///             }),
///         ],
///         &mut NullRender,
///         &cancel,
///     )
///     .unwrap();
/// let log = outcome.into_log();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bench {
    config: Config,
    resume: Option<SampleLog>,
}

impl Bench {
    /// Create a session with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target efficiency ratio in (0, 1).
    pub fn efficiency(mut self, efficiency: f64) -> Self {
        self.config.efficiency = efficiency;
        self
    }

    /// Set the warmup round threshold.
    pub fn warmup_rounds(mut self, rounds: usize) -> Self {
        self.config.warmup_rounds = rounds;
        self
    }

    /// Cap total rounds; the session then completes without cancellation.
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.config.max_rounds = Some(rounds);
        self
    }

    /// Set the bootstrap bucket size.
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = size;
        self
    }

    /// Set the bootstrap trial count.
    pub fn trials(mut self, trials: usize) -> Self {
        self.config.trials = trials;
        self
    }

    /// Seed the analysis RNG for reproducible bootstrap output.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Continue from a previously collected log.
    ///
    /// The resumed rounds become rounds `0..k` of this session; derived
    /// statistics treat them exactly like freshly collected rounds.
    pub fn resume(mut self, log: SampleLog) -> Self {
        self.resume = Some(log);
        self
    }

    /// The current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the measurement loop until cancellation or the round cap.
    ///
    /// Fails fast — before any candidate is invoked — on invalid
    /// configuration, an empty candidate list, more candidates than the
    /// palette supports, or a resumed log whose shape does not match the
    /// candidates. A panic inside a candidate propagates unchanged and
    /// discards the in-progress round.
    pub fn run(
        self,
        mut candidates: Vec<Candidate>,
        renderer: &mut dyn Render,
        cancel: &CancelToken,
    ) -> Result<Outcome> {
        self.config.validate()?;
        if candidates.is_empty() {
            return Err(Error::NoFunctions);
        }
        let colors = palette::colors(candidates.len())?;

        let mut log = match self.resume {
            Some(prior) => {
                if prior.function_count() != candidates.len() {
                    return Err(Error::ResumeMismatch {
                        resumed: prior.function_count(),
                        candidates: candidates.len(),
                    });
                }
                prior
            }
            None => SampleLog::new(
                candidates
                    .iter()
                    .map(|c| c.name().to_string())
                    .collect(),
            ),
        };
        let initial_rounds = log.len();

        // Continue the session clock after the resumed log's last stamp so
        // round ordering holds across sessions.
        let offset_ms = log
            .rounds()
            .last()
            .and_then(|round| round.last())
            .map_or(0.0, |stamp| stamp.end);
        let clock = SessionClock::new(offset_ms);

        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

        let started = Instant::now();
        let mut rendering_secs = 0.0;

        loop {
            if cancel.is_cancelled() {
                return Ok(Outcome::Cancelled(log));
            }
            if let Some(cap) = self.config.max_rounds {
                if log.len() >= cap {
                    return Ok(Outcome::Completed(log));
                }
            }

            let round = measurement::run_round(&clock, &mut candidates);
            log.append(round);

            let elapsed = started.elapsed().as_secs_f64();
            let rendering_ratio = if elapsed > 0.0 {
                rendering_secs / elapsed
            } else {
                0.0
            };

            if log.len() > self.config.warmup_rounds
                && rendering_ratio < 1.0 - self.config.efficiency
            {
                let pass_started = Instant::now();
                let counters = Counters::compute(&log, initial_rounds, elapsed);
                // Analysis failures degrade the display, never the collection.
                if let Ok(report) =
                    analysis::analyze(&log, &self.config, &colors, counters, &mut rng)
                {
                    renderer.update(&report);
                }
                rendering_secs += pass_started.elapsed().as_secs_f64();
            }
        }
    }
}
