//! # incbeta
//!
//! The regularized incomplete beta function I_x(a, b) and its inverse, in
//! pure Rust, no-std compatible. The flat C ABI lives in the `incbeta-ffi`
//! workspace member.
//!
//! ## Quick start
//!
//! ```
//! use incbeta::special::{betainc, betainc_inv};
//!
//! // I_{0.5}(2, 3) = 11/16
//! let p = betainc(2.0_f64, 3.0, 0.5).unwrap();
//! assert!((p - 0.6875).abs() < 1e-14);
//!
//! // and back
//! let x = betainc_inv(2.0_f64, 3.0, 0.6875).unwrap();
//! assert!((x - 0.5).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`special`]: `betainc`, `betainc_inv` (with [`special::InverseSettings`]),
//!   and the supporting `lgamma`, `beta`, `lbeta`. Errors are reported as
//!   [`special::SpecialError`]: `DomainError` for a ≤ 0, b ≤ 0, non-finite
//!   shapes, or a third argument outside [0, 1]; `ConvergenceFailure` when an
//!   iteration runs out of budget.
//!
//! - [`stats`]: [`stats::Beta`] and [`stats::Binomial`] distributions whose
//!   CDF and quantile go through the incomplete beta function.
//!
//! - [`bandit`]: Thompson sampling over Beta posteriors of success/failure
//!   counts. Requires the `bandit` feature.
//!
//! - [`traits`]: [`FloatScalar`], the `f32`/`f64` bound used throughout.
//!
//! ## Cargo features
//!
//! | Feature  | Default  | Description |
//! |----------|----------|-------------|
//! | `std`    | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` impls |
//! | `alloc`  | via std  | [`bandit::rank`] |
//! | `bandit` | yes      | Thompson sampling, pulls in `rand` |
//!
//! Without `std`, float math falls back to the pure-Rust `libm`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "bandit")]
pub mod bandit;
pub mod special;
pub mod stats;
pub mod traits;

pub use special::{betainc, betainc_inv, SpecialError};
pub use traits::{FloatScalar, Scalar};
