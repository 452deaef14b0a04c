//! Flat C ABI over [`incbeta::special`].
//!
//! Every function forwards its arguments unchanged to the Rust
//! implementation. Two failure conventions are offered:
//!
//! - the plain functions (`ibeta`, `ibeta_inv`, and their `f32` variants)
//!   return NaN for a domain error or a convergence failure;
//! - the `_checked` functions return an [`IncbetaStatus`] and write the value
//!   through the out pointer only on success.
//!
//! The matching declarations live in `include/incbeta.h` next to this
//! crate's manifest. These signatures
//! are part of the ABI; changing them requires bumping [`ABI_VERSION`].

use core::ffi::{c_double, c_float};

use incbeta::special::{betainc, betainc_inv, SpecialError};

/// C ABI version.
pub const ABI_VERSION: u32 = 1;

/// Status codes returned by the checked entry points.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncbetaStatus {
    /// The value was written to the out pointer.
    Ok = 0,
    /// a ≤ 0, b ≤ 0, a non-finite shape, or the third argument outside [0, 1].
    DomainError = 1,
    /// The iteration did not reach its tolerance.
    ConvergenceFailure = 2,
    /// The out pointer was null.
    NullPointer = 3,
}

impl From<SpecialError> for IncbetaStatus {
    fn from(err: SpecialError) -> Self {
        match err {
            SpecialError::DomainError => Self::DomainError,
            SpecialError::ConvergenceFailure => Self::ConvergenceFailure,
        }
    }
}

/// Version of this ABI, for runtime compatibility checks.
#[no_mangle]
pub extern "C" fn incbeta_abi_version() -> u32 {
    ABI_VERSION
}

/// Regularized incomplete beta function I_x(a, b). NaN on failure.
#[no_mangle]
pub extern "C" fn ibeta(a: c_double, b: c_double, x: c_double) -> c_double {
    or_nan("ibeta", a, b, x, betainc(a, b, x))
}

/// Inverse of [`ibeta`] in its third argument: x with I_x(a, b) = p. NaN on failure.
#[no_mangle]
pub extern "C" fn ibeta_inv(a: c_double, b: c_double, p: c_double) -> c_double {
    or_nan("ibeta_inv", a, b, p, betainc_inv(a, b, p))
}

/// Single-precision [`ibeta`].
#[no_mangle]
pub extern "C" fn ibetaf(a: c_float, b: c_float, x: c_float) -> c_float {
    or_nan("ibetaf", a, b, x, betainc(a, b, x))
}

/// Single-precision [`ibeta_inv`].
#[no_mangle]
pub extern "C" fn ibeta_invf(a: c_float, b: c_float, p: c_float) -> c_float {
    or_nan("ibeta_invf", a, b, p, betainc_inv(a, b, p))
}

/// [`ibeta`] reporting failures as a status code.
///
/// # Safety
///
/// `out` must be null or valid for a write of one `double`.
#[no_mangle]
pub unsafe extern "C" fn ibeta_checked(
    a: c_double,
    b: c_double,
    x: c_double,
    out: *mut c_double,
) -> IncbetaStatus {
    // SAFETY: forwarded from the caller's contract on `out`.
    unsafe { write_result("ibeta_checked", a, b, x, betainc(a, b, x), out) }
}

/// [`ibeta_inv`] reporting failures as a status code.
///
/// # Safety
///
/// `out` must be null or valid for a write of one `double`.
#[no_mangle]
pub unsafe extern "C" fn ibeta_inv_checked(
    a: c_double,
    b: c_double,
    p: c_double,
    out: *mut c_double,
) -> IncbetaStatus {
    // SAFETY: forwarded from the caller's contract on `out`.
    unsafe { write_result("ibeta_inv_checked", a, b, p, betainc_inv(a, b, p), out) }
}

fn or_nan<T>(name: &str, a: T, b: T, z: T, result: Result<T, SpecialError>) -> T
where
    T: incbeta::FloatScalar + core::fmt::Display,
{
    match result {
        Ok(v) => v,
        Err(err) => {
            log_failure(name, a, b, z, err);
            T::nan()
        }
    }
}

/// # Safety
///
/// `out` must be null or valid for a write of one `T`.
unsafe fn write_result<T>(
    name: &str,
    a: T,
    b: T,
    z: T,
    result: Result<T, SpecialError>,
    out: *mut T,
) -> IncbetaStatus
where
    T: incbeta::FloatScalar + core::fmt::Display,
{
    if out.is_null() {
        log::debug!("{name}: null out pointer");
        return IncbetaStatus::NullPointer;
    }
    match result {
        Ok(v) => {
            // SAFETY: non-null and valid for writes per the caller's contract.
            unsafe { out.write(v) };
            IncbetaStatus::Ok
        }
        Err(err) => {
            log_failure(name, a, b, z, err);
            err.into()
        }
    }
}

fn log_failure<T: core::fmt::Display>(name: &str, a: T, b: T, z: T, err: SpecialError) {
    match err {
        SpecialError::DomainError => log::debug!("{name}({a}, {b}, {z}): {err}"),
        SpecialError::ConvergenceFailure => log::warn!("{name}({a}, {b}, {z}): {err}"),
    }
}
