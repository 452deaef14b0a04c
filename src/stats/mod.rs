//! Probability distributions built on the incomplete beta function.
//!
//! | Distribution | Parameters | Support | CDF |
//! |---|---|---|---|
//! | [`Beta`] | shape α, shape β | [0, 1] | I_x(α, β) |
//! | [`Binomial`] | trials n, probability p | {0, …, n} | I_{1−p}(n−k, k+1) |
//!
//! # Example
//!
//! ```
//! use incbeta::stats::{Beta, ContinuousDistribution};
//!
//! let b = Beta::new(2.0_f64, 3.0).unwrap();
//! assert!((b.cdf(0.5) - 0.6875).abs() < 1e-14);
//! assert!((b.quantile(0.6875) - 0.5).abs() < 1e-12);
//! ```

mod beta_dist;
mod binomial;


pub use beta_dist::Beta;
pub use binomial::Binomial;

/// Errors from distribution construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsError {
    /// A parameter is out of its valid range.
    InvalidParameter,
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::InvalidParameter => {
                write!(f, "distribution parameter out of valid range")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Trait for continuous probability distributions.
pub trait ContinuousDistribution<T> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;
    /// Natural log of the probability density function.
    fn ln_pdf(&self, x: T) -> T;
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;
    /// Quantile function (inverse CDF). Returns x such that P(X ≤ x) = p.
    fn quantile(&self, p: T) -> T;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
}

/// Trait for discrete probability distributions.
pub trait DiscreteDistribution<T> {
    /// Probability mass function P(X = k).
    fn pmf(&self, k: u64) -> T;
    /// Natural log of the probability mass function.
    fn ln_pmf(&self, k: u64) -> T;
    /// Cumulative distribution function P(X ≤ k).
    fn cdf(&self, k: u64) -> T;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
}
