//! Beta function and log-beta.

use crate::FloatScalar;
use super::gamma_fn::{lgamma, lgamma_correction, LN_SQRT_2PI};

/// Beta function B(a, b) = Γ(a)·Γ(b) / Γ(a+b).
///
/// Computed as `exp(lbeta(a, b))`; underflows to zero for large arguments.
///
/// # Example
///
/// ```
/// use incbeta::special::beta;
///
/// // B(2, 3) = 1/12
/// assert!((beta(2.0_f64, 3.0) - 1.0 / 12.0).abs() < 1e-14);
/// ```
pub fn beta<T: FloatScalar>(a: T, b: T) -> T {
    lbeta(a, b).exp()
}

/// Natural logarithm of the beta function, ln B(a, b), for a, b > 0.
///
/// When both arguments are at least 10 the three log-gamma terms nearly
/// cancel, so the large parts are combined analytically and only the
/// Stirling remainders are summed. Small arguments use
/// `lgamma(a) + lgamma(b) − lgamma(a+b)` directly.
///
/// # Example
///
/// ```
/// use incbeta::special::lbeta;
///
/// assert!(lbeta(1.0_f64, 1.0).abs() < 1e-14);
/// // B(a, 1) = 1/a
/// assert!((lbeta(1000.0_f64, 1.0) + 1000.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn lbeta<T: FloatScalar>(a: T, b: T) -> T {
    let p = a.min(b);
    let q = a.max(b);
    let ten = T::from(10.0).unwrap();
    let half = T::from(0.5).unwrap();
    let pq = p + q;

    if p >= ten {
        let corr = lgamma_correction(p) + lgamma_correction(q) - lgamma_correction(pq);
        -half * q.ln() + T::from(LN_SQRT_2PI).unwrap() + corr
            + (p - half) * (p / pq).ln()
            + q * (-p / pq).ln_1p()
    } else if q >= ten {
        let corr = lgamma_correction(q) - lgamma_correction(pq);
        lgamma(p) + corr + p - p * pq.ln() + (q - half) * (-p / pq).ln_1p()
    } else {
        lgamma(p) + lgamma(q) - lgamma(pq)
    }
}
