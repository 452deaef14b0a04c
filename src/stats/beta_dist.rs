use crate::FloatScalar;
use crate::special::{betainc, betainc_inv, lbeta, SpecialError};
use super::{ContinuousDistribution, StatsError};

/// Beta distribution with shape parameters α and β on [0, 1].
///
/// f(x) = x^{α−1} (1−x)^{β−1} / B(α, β) for 0 ≤ x ≤ 1.
///
/// The trait methods report numeric failures as NaN; use
/// [`Beta::try_quantile`] to get the error instead.
///
/// # Example
///
/// ```
/// use incbeta::stats::{Beta, ContinuousDistribution};
///
/// let b = Beta::new(2.0_f64, 5.0).unwrap();
/// assert!((b.mean() - 2.0/7.0).abs() < 1e-14);
///
/// let x = b.quantile(0.9);
/// assert!((b.cdf(x) - 0.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Beta<T> {
    alpha: T,
    beta: T,
}

impl<T: FloatScalar> Beta<T> {
    /// Create a Beta distribution with shape parameters `alpha` and `beta`.
    /// Requires both finite and > 0.
    pub fn new(alpha: T, beta: T) -> Result<Self, StatsError> {
        if !crate::special::valid_shape(alpha, beta) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { alpha, beta })
    }

    /// Construct from shapes the caller already knows are finite and > 0.
    pub(crate) fn from_valid_shapes(alpha: T, beta: T) -> Self {
        debug_assert!(crate::special::valid_shape(alpha, beta));
        Self { alpha, beta }
    }

    /// First shape parameter α.
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Second shape parameter β.
    pub fn beta(&self) -> T {
        self.beta
    }

    /// Quantile with the solver error preserved.
    ///
    /// `p` outside [0, 1] is a [`SpecialError::DomainError`].
    pub fn try_quantile(&self, p: T) -> Result<T, SpecialError> {
        betainc_inv(self.alpha, self.beta, p)
    }

    /// Median, the ½-quantile.
    pub fn median(&self) -> T {
        self.quantile(T::from(0.5).unwrap())
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Beta<T> {
    fn pdf(&self, x: T) -> T {
        if x < T::zero() || x > T::one() {
            return T::zero();
        }
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        if x < T::zero() || x > T::one() {
            return T::neg_infinity();
        }
        let one = T::one();
        // A unit shape drops its factor entirely, so the density stays finite at 0 and 1.
        let left = if self.alpha == one { T::zero() } else { (self.alpha - one) * x.ln() };
        let right = if self.beta == one { T::zero() } else { (self.beta - one) * (-x).ln_1p() };
        left + right - lbeta(self.alpha, self.beta)
    }

    fn cdf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::zero();
        }
        if x >= T::one() {
            return T::one();
        }
        betainc(self.alpha, self.beta, x).unwrap_or(T::nan())
    }

    fn quantile(&self, p: T) -> T {
        self.try_quantile(p).unwrap_or(T::nan())
    }

    fn mean(&self) -> T {
        self.alpha / (self.alpha + self.beta)
    }

    fn variance(&self) -> T {
        let ab = self.alpha + self.beta;
        self.alpha * self.beta / (ab * ab * (ab + T::one()))
    }
}
