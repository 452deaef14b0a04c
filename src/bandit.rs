//! Thompson sampling over Beta posteriors.
//!
//! Each [`Arm`] counts successes and failures. Its posterior is
//! Beta(successes + 1, failures + 1) (uniform prior). A Thompson step draws
//! u ~ U(0, 1) per arm, maps it through the posterior quantile
//! (the inverse incomplete beta function), weights the draw, and picks the
//! arm with the largest score.
//!
//! Requires the `bandit` feature.
//!
//! # Example
//!
//! ```
//! use incbeta::bandit::{select, Arm, Weighting};
//!
//! # fn main() -> Result<(), incbeta::special::SpecialError> {
//! let mut arms = [Arm::new(), Arm::new()];
//! arms[0].record(false, 12.0);
//! arms[1].record(true, 12.0);
//!
//! // Constant generator: every draw is u ≈ 0.5, i.e. the posterior medians.
//! let mut rng = rand::rngs::mock::StepRng::new(u64::MAX / 2, 0);
//! let chosen = select(&arms, Weighting::Plain, &mut rng)?;
//! assert_eq!(chosen, Some(1));
//! # Ok(())
//! # }
//! ```

use rand::Rng;

use crate::special::{betainc_inv, SpecialError};
use crate::stats::Beta;

/// Runtime assumed for arms that have never been timed, in milliseconds.
/// Small enough that untimed arms win runtime-biased selection.
pub const UNKNOWN_RUNTIME_MS: f64 = 0.01;

/// How a posterior draw is turned into a selection score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// `draw · bias`.
    Plain,
    /// `draw · (100 / runtime_ms) · bias`. A bias of 5 weighs an arm like
    /// an identical arm that runs 5x faster.
    RuntimeBiased,
}

/// Success/failure counts and timing for one arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arm {
    /// Number of successful (interesting) runs.
    pub successes: u64,
    /// Number of unsuccessful runs.
    pub failures: u64,
    /// Number of runs with a recorded runtime.
    pub runs: u64,
    /// Mean runtime in milliseconds, `None` until the first run.
    pub avg_runtime_ms: Option<f64>,
    /// User weight applied to every score.
    pub bias: f64,
}

impl Default for Arm {
    fn default() -> Self {
        Self::new()
    }
}

impl Arm {
    /// Arm with no observations and unit bias.
    pub fn new() -> Self {
        Self {
            successes: 0,
            failures: 0,
            runs: 0,
            avg_runtime_ms: None,
            bias: 1.0,
        }
    }

    /// Replace the bias.
    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    /// Record one run and fold its runtime into the running mean.
    pub fn record(&mut self, success: bool, runtime_ms: f64) {
        if success {
            self.successes += 1;
        } else {
            self.failures += 1;
        }
        let total = self.avg_runtime_ms.unwrap_or(0.0) * self.runs as f64;
        self.runs += 1;
        self.avg_runtime_ms = Some((total + runtime_ms) / self.runs as f64);
    }

    /// Forget all observations; the bias is kept.
    pub fn reset(&mut self) {
        *self = Self::new().with_bias(self.bias);
    }

    /// Posterior Beta(successes + 1, failures + 1).
    pub fn posterior(&self) -> Beta<f64> {
        let (a, b) = self.shape();
        // Counts + 1 are finite and at least 1.
        Beta::from_valid_shapes(a, b)
    }

    /// Point below which `area` of the posterior mass lies.
    pub fn percentile(&self, area: f64) -> Result<f64, SpecialError> {
        let (a, b) = self.shape();
        betainc_inv(a, b, area)
    }

    /// Posterior median.
    pub fn median(&self) -> Result<f64, SpecialError> {
        self.percentile(0.5)
    }

    /// Score for the uniform draw `u` ∈ [0, 1].
    pub fn score(&self, u: f64, weighting: Weighting) -> Result<f64, SpecialError> {
        let draw = self.percentile(u)?;
        Ok(match weighting {
            Weighting::Plain => draw * self.bias,
            Weighting::RuntimeBiased => {
                let runtime = self.avg_runtime_ms.unwrap_or(UNKNOWN_RUNTIME_MS);
                draw * (100.0 / runtime) * self.bias
            }
        })
    }

    fn shape(&self) -> (f64, f64) {
        (self.successes as f64 + 1.0, self.failures as f64 + 1.0)
    }
}

/// One Thompson step: index of the arm with the highest sampled score.
///
/// Ties keep the earliest arm. Returns `Ok(None)` for an empty slice or when
/// every score is negative.
pub fn select<R: Rng + ?Sized>(
    arms: &[Arm],
    weighting: Weighting,
    rng: &mut R,
) -> Result<Option<usize>, SpecialError> {
    let mut best: Option<(usize, f64)> = None;
    for (index, arm) in arms.iter().enumerate() {
        let score = arm.score(rng.gen_range(0.0..1.0), weighting)?;
        if score >= 0.0 && best.map_or(true, |(_, s)| score > s) {
            best = Some((index, score));
        }
    }
    log::trace!("thompson select ({weighting:?}): {best:?}");
    Ok(best.map(|(index, _)| index))
}

/// Sample every arm once and return the indices of arms with a non-negative
/// score, ordered by descending score.
///
/// Arms with a negative score are left out, as in [`select`], so
/// `rank(..).first()` is the arm `select` would have picked with the same
/// draws.
#[cfg(feature = "alloc")]
pub fn rank<R: Rng + ?Sized>(
    arms: &[Arm],
    weighting: Weighting,
    rng: &mut R,
) -> Result<alloc::vec::Vec<usize>, SpecialError> {
    use alloc::vec::Vec;

    let mut scored = Vec::with_capacity(arms.len());
    for (index, arm) in arms.iter().enumerate() {
        let score = arm.score(rng.gen_range(0.0..1.0), weighting)?;
        if score >= 0.0 {
            scored.push((index, score));
        }
    }
    // Stable sort keeps the earlier arm first on ties.
    scored.sort_by(|l, r| r.1.total_cmp(&l.1));
    log::trace!("thompson rank ({weighting:?}): {scored:?}");
    Ok(scored.into_iter().map(|(index, _)| index).collect())
}
