pub mod complex;
pub mod consts;
pub mod error;
pub mod input;
pub mod literal;
pub mod math;
pub mod prelude;
pub mod util;

/// Create a **[`Complex`](crate::complex::Complex)** from rectangular parts.
///
/// ```
/// use cmplx::complex;
/// let z = complex!(3, -4);
///
/// assert_eq!(z.abs(), 5.0);
/// assert_eq!(complex!(2.5).to_string(), "2.5");
/// ```
///
/// Components are converted with `as f64`, so integer literals work.
#[macro_export]
macro_rules! complex {
    ($re:expr, $im:expr $(,)?) => {{
        $crate::complex::Complex::new($re as f64, $im as f64)
    }};
    ($re:expr $(,)?) => {{
        $crate::complex::Complex::new($re as f64, 0.0)
    }};
}
