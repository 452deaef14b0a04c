use incbeta_ffi::{
    ibeta, ibeta_checked, ibeta_inv, ibeta_inv_checked, ibeta_invf, ibetaf, incbeta_abi_version,
    IncbetaStatus, ABI_VERSION,
};

fn approx_eq(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{msg}: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

// ── plain entry points ───────────────────────────────────────────────

#[test]
fn abi_version() {
    assert_eq!(incbeta_abi_version(), ABI_VERSION);
    assert_eq!(ABI_VERSION, 1);
}

#[test]
fn ibeta_closed_form() {
    approx_eq(ibeta(2.0, 3.0, 0.5), 0.6875, 1e-14, "I_0.5(2,3)");
    approx_eq(ibeta_inv(2.0, 3.0, 0.6875), 0.5, 1e-12, "inverse of 0.6875");
}

#[test]
fn ibeta_endpoints() {
    for &(a, b) in &[(0.5, 0.5), (2.0, 3.0), (100.0, 1.0)] {
        assert_eq!(ibeta(a, b, 0.0), 0.0);
        assert_eq!(ibeta(a, b, 1.0), 1.0);
        assert_eq!(ibeta_inv(a, b, 0.0), 0.0);
        assert_eq!(ibeta_inv(a, b, 1.0), 1.0);
    }
}

#[test]
fn inverse_median_of_linear_density() {
    // I_x(2, 1) = x²
    approx_eq(
        ibeta_inv(2.0, 1.0, 0.5),
        core::f64::consts::FRAC_1_SQRT_2,
        1e-14,
        "median of Beta(2,1)",
    );
}

#[test]
fn inverse_symmetric_large_shapes() {
    let x = ibeta_inv(1001.0, 1001.0, 0.5);
    approx_eq(x, 0.5, 1e-12, "median of Beta(1001,1001)");
    approx_eq(ibeta(1001.0, 1001.0, x), 0.5, 1e-10, "forward at median");
}

#[test]
fn very_large_shapes_are_finite() {
    approx_eq(ibeta(2e5, 2e5, 0.5), 0.5, 1e-12, "I_0.5(2e5,2e5)");
    approx_eq(ibeta_inv(1e6, 1e6, 0.5), 0.5, 1e-13, "median of Beta(1e6,1e6)");
    let mut out = f64::NAN;
    // SAFETY: `out` is a live local.
    let status = unsafe { ibeta_checked(1e6, 1e6, 0.4995, &mut out) };
    assert_eq!(status, IncbetaStatus::Ok);
    approx_eq(out / 0.07864957758090163, 1.0, 1e-12, "I_0.4995(1e6,1e6)");
}

#[test]
fn domain_errors_are_nan() {
    assert!(ibeta(0.0, 2.0, 0.5).is_nan());
    assert!(ibeta(2.0, -1.0, 0.5).is_nan());
    assert!(ibeta(2.0, 3.0, -0.1).is_nan());
    assert!(ibeta(2.0, 3.0, 1.1).is_nan());
    assert!(ibeta(f64::NAN, 3.0, 0.5).is_nan());
    assert!(ibeta(f64::INFINITY, 3.0, 0.5).is_nan());
    assert!(ibeta_inv(0.0, 2.0, 0.5).is_nan());
    assert!(ibeta_inv(2.0, 3.0, 1.5).is_nan());
    assert!(ibeta_inv(2.0, 3.0, f64::NAN).is_nan());
}

#[test]
fn single_precision() {
    assert!((ibetaf(2.0, 3.0, 0.5) - 0.6875).abs() < 1e-4);
    assert!((ibeta_invf(2.0, 3.0, 0.6875) - 0.5).abs() < 1e-4);
    assert!(ibetaf(-1.0, 3.0, 0.5).is_nan());
    assert!(ibeta_invf(2.0, 3.0, -0.5).is_nan());
}

// ── checked entry points ─────────────────────────────────────────────

#[test]
fn checked_success_writes_value() {
    let mut out = f64::NAN;
    let status = unsafe { ibeta_checked(2.0, 3.0, 0.5, &mut out) };
    assert_eq!(status, IncbetaStatus::Ok);
    approx_eq(out, 0.6875, 1e-14, "checked forward");

    let status = unsafe { ibeta_inv_checked(2.0, 3.0, 0.6875, &mut out) };
    assert_eq!(status, IncbetaStatus::Ok);
    approx_eq(out, 0.5, 1e-12, "checked inverse");
}

#[test]
fn checked_domain_error_leaves_out_untouched() {
    let mut out = -7.0;
    let status = unsafe { ibeta_checked(0.0, 3.0, 0.5, &mut out) };
    assert_eq!(status, IncbetaStatus::DomainError);
    assert_eq!(out, -7.0);

    let status = unsafe { ibeta_inv_checked(2.0, 3.0, -0.1, &mut out) };
    assert_eq!(status, IncbetaStatus::DomainError);
    assert_eq!(out, -7.0);
}

#[test]
fn checked_null_pointer() {
    let status = unsafe { ibeta_checked(2.0, 3.0, 0.5, core::ptr::null_mut()) };
    assert_eq!(status, IncbetaStatus::NullPointer);
    let status = unsafe { ibeta_inv_checked(2.0, 3.0, 0.5, core::ptr::null_mut()) };
    assert_eq!(status, IncbetaStatus::NullPointer);
}

#[test]
fn status_codes_are_stable() {
    assert_eq!(IncbetaStatus::Ok as i32, 0);
    assert_eq!(IncbetaStatus::DomainError as i32, 1);
    assert_eq!(IncbetaStatus::ConvergenceFailure as i32, 2);
    assert_eq!(IncbetaStatus::NullPointer as i32, 3);
}
