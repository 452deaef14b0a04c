use crate::FloatScalar;
use crate::special::{betainc, lbeta};
use super::{DiscreteDistribution, StatsError};

/// Binomial distribution B(n, p).
///
/// P(X = k) = C(n,k) p^k (1−p)^{n−k} for k = 0, …, n. The CDF is the
/// incomplete beta function I_{1−p}(n−k, k+1).
///
/// # Example
///
/// ```
/// use incbeta::stats::{Binomial, DiscreteDistribution};
///
/// let b = Binomial::new(4, 0.5_f64).unwrap();
/// // P(X ≤ 1) = (1 + 4) / 16
/// assert!((b.cdf(1) - 5.0 / 16.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Binomial<T> {
    n: u64,
    p: T,
}

impl<T: FloatScalar> Binomial<T> {
    /// Create a binomial distribution with `n` trials and success probability `p`.
    /// Requires `0 ≤ p ≤ 1`.
    pub fn new(n: u64, p: T) -> Result<Self, StatsError> {
        if !crate::special::in_unit_interval(p) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { n, p })
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Binomial<T> {
    fn pmf(&self, k: u64) -> T {
        if k > self.n {
            return T::zero();
        }
        self.ln_pmf(k).exp()
    }

    fn ln_pmf(&self, k: u64) -> T {
        if k > self.n {
            return T::neg_infinity();
        }
        let one = T::one();
        let zero = T::zero();
        let nf = T::from(self.n).unwrap();
        let kf = T::from(k).unwrap();

        // Degenerate p: all mass on k = 0 or k = n.
        if self.p == zero {
            return if k == 0 { zero } else { T::neg_infinity() };
        }
        if self.p == one {
            return if k == self.n { zero } else { T::neg_infinity() };
        }

        // ln C(n, k) = −ln(n+1) − ln B(k+1, n−k+1)
        -(nf + one).ln() - lbeta(kf + one, nf - kf + one)
            + kf * self.p.ln()
            + (nf - kf) * (-self.p).ln_1p()
    }

    fn cdf(&self, k: u64) -> T {
        if k >= self.n {
            return T::one();
        }
        let one = T::one();
        let a = T::from(self.n - k).unwrap();
        let b = T::from(k + 1).unwrap();
        betainc(a, b, one - self.p).unwrap_or(T::nan())
    }

    fn mean(&self) -> T {
        T::from(self.n).unwrap() * self.p
    }

    fn variance(&self) -> T {
        T::from(self.n).unwrap() * self.p * (T::one() - self.p)
    }
}
