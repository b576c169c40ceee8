use std::f64::consts::FRAC_PI_4;

/// Absolute tolerance used by [`Complex::equals`](crate::complex::Complex::equals).
pub const EPSILON: f64 = 1e-15;

/// Below this magnitude both components may be squared without overflow
/// when computing `log(|z|)`.
pub const LOG_NORM_THRESHOLD: f64 = 3000.0;

/// Largest `|x|` for which `cos(x) - 1` is evaluated from its Taylor series.
pub const COS_M1_LIMIT: f64 = FRAC_PI_4;

/// At or below this magnitude squaring a component underflows, so `norm`
/// and `log_norm` switch to the scaled form.
pub const NORM_UNDERFLOW_THRESHOLD: f64 = 1e-150;
