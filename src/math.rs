//! Scalar helpers shared by the complex operation set.
//!
//! All functions follow plain IEEE754 semantics and never fail; non-finite
//! inputs produce NaN or infinite outputs.

use crate::consts::{COS_M1_LIMIT, LOG_NORM_THRESHOLD, NORM_UNDERFLOW_THRESHOLD};

/// Euclidean magnitude of `(x, y)`.
///
/// Moderate inputs use the direct formula; very large or very small ones are
/// scaled by the component of larger magnitude so that squaring can neither
/// overflow nor underflow.
pub fn norm(x: f64, y: f64) -> f64 {
    let a = x.abs();
    let b = y.abs();
    if a.is_infinite() || b.is_infinite() {
        return f64::INFINITY;
    }
    let (big, small) = if a < b { (b, a) } else { (a, b) };
    if big == 0.0 {
        return 0.0;
    }
    if big < LOG_NORM_THRESHOLD && big > NORM_UNDERFLOW_THRESHOLD {
        return (a * a + b * b).sqrt();
    }
    let ratio = small / big;
    big * (1.0 + ratio * ratio).sqrt()
}

/// `log(norm(x, y))` without forming `x² + y²` for large or tiny components.
pub fn log_norm(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        return y.abs().ln();
    }
    if y == 0.0 {
        return x.abs().ln();
    }
    let big = x.abs().max(y.abs());
    if big <= NORM_UNDERFLOW_THRESHOLD {
        return norm(x, y).ln();
    }
    if big < LOG_NORM_THRESHOLD {
        return 0.5 * (x * x + y * y).ln();
    }
    (x / y.atan2(x).cos()).ln()
}

pub fn cosh(x: f64) -> f64 {
    x.cosh()
}

pub fn sinh(x: f64) -> f64 {
    x.sinh()
}

/// `cos(x) - 1`, accurate for `x` close to zero.
pub fn cos_m1(x: f64) -> f64 {
    if !(-COS_M1_LIMIT..=COS_M1_LIMIT).contains(&x) {
        return x.cos() - 1.0;
    }
    let xx = x * x;
    xx * (-0.5
        + xx * (1.0 / 24.0
            + xx * (-1.0 / 720.0
                + xx * (1.0 / 40320.0
                    + xx * (-1.0 / 3628800.0
                        + xx * (1.0 / 479001600.0
                            + xx * (-1.0 / 87178291200.0 + xx * (1.0 / 20922789888000.0))))))))
}
