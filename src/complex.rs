use crate::consts;
use crate::error::ComplexError;
use crate::input::{self, ComplexInput};
use crate::math::{cos_m1, log_norm, norm};
use num_complex::Complex64;
use std::f64::consts::{E, PI};

mod format;
mod ops;
mod trig;

/// A complex number in rectangular form with `f64` components.
///
/// Values are immutable: every operation returns a new value and leaves its
/// operands untouched. Construct with [`Complex::new`] (no checks) or with
/// [`Complex::build`] / [`Complex::parse`] for the other input shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    pub const I: Complex = Complex::new(0.0, 1.0);
    pub const PI: Complex = Complex::new(PI, 0.0);
    pub const E: Complex = Complex::new(E, 0.0);
    /// Unsigned complex infinity
    pub const INFINITY: Complex = Complex::new(f64::INFINITY, f64::INFINITY);
    pub const NAN: Complex = Complex::new(f64::NAN, f64::NAN);
    pub const EPSILON: f64 = consts::EPSILON;

    /// Create a complex number from real and imaginary parts
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Normalize any supported input shape, see [`ComplexInput`].
    pub fn build(input: impl Into<ComplexInput>) -> Result<Self, ComplexError> {
        input::build(input)
    }

    /// Parse a literal such as `"3 - 6i"`.
    pub fn parse(s: &str) -> Result<Self, ComplexError> {
        input::build(ComplexInput::LiteralString(s.to_string()))
    }

    /// Create a complex number from a magnitude and angle in radians
    pub fn from_polar(abs: f64, arg: f64) -> Result<Self, ComplexError> {
        input::build(ComplexInput::PolarAbsArg { abs, arg })
    }

    pub fn re(&self) -> f64 {
        self.re
    }

    pub fn im(&self) -> f64 {
        self.im
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    pub fn is_infinite(&self) -> bool {
        !(self.is_nan() || self.is_finite())
    }

    /// Magnitude, computed without intermediate overflow
    pub fn abs(&self) -> f64 {
        norm(self.re, self.im)
    }

    /// Phase angle in radians
    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Unit vector in the direction of `self`
    pub fn sign(&self) -> Complex {
        let abs = self.abs();
        Complex::new(self.re / abs, self.im / abs)
    }

    pub fn conjugate(&self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// `1 / self`, with `1/0 = ∞` and `1/∞ = 0`.
    pub fn inverse(&self) -> Complex {
        if self.is_zero() {
            return Complex::INFINITY;
        }
        if self.is_infinite() {
            return Complex::ZERO;
        }
        self.reciprocal()
    }

    /// `conj(self) / |self|²` with no special cases; callers handle zero and
    /// infinite operands. When `|self|²` overflows or underflows, divides by
    /// `|self|` twice instead.
    fn reciprocal(&self) -> Complex {
        let d = self.re * self.re + self.im * self.im;
        if d.is_normal() {
            return Complex::new(self.re / d, -self.im / d);
        }
        let m = self.abs();
        Complex::new(self.re / m / m, -self.im / m / m)
    }

    /// Raise `self` to a complex power.
    pub fn pow(self, exponent: impl Into<Complex>) -> Complex {
        let z = exponent.into();
        if z.is_zero() {
            return Complex::ONE;
        }

        if z.im == 0.0 {
            let integral = z.re.fract() == 0.0;
            if self.im == 0.0 && (self.re >= 0.0 || integral) {
                return Complex::new(self.re.powf(z.re), 0.0);
            }
            if self.re == 0.0 && integral {
                // i^n cycles with period 4; avoids trig round-off
                let p = self.im.powf(z.re);
                let quadrant = z.re.rem_euclid(4.0);
                if quadrant == 0.0 {
                    return Complex::new(p, 0.0);
                } else if quadrant == 1.0 {
                    return Complex::new(0.0, p);
                } else if quadrant == 2.0 {
                    return Complex::new(-p, 0.0);
                } else if quadrant == 3.0 {
                    return Complex::new(0.0, -p);
                }
            }
        }

        if self.is_zero() && z.re >= 0.0 && z.im >= 0.0 {
            return Complex::ZERO;
        }

        let arg = self.arg();
        let loh = log_norm(self.re, self.im);
        let mag = (z.re * loh - z.im * arg).exp();
        let angle = z.im * loh + z.re * arg;
        Complex::new(mag * angle.cos(), mag * angle.sin())
    }

    /// Principal square root. Half-angle terms are halved before summing so
    /// no intermediate exceeds `|self|`.
    pub fn sqrt(&self) -> Complex {
        if self.re >= 0.0 && self.im == 0.0 {
            return Complex::new(self.re.sqrt(), 0.0);
        }
        let abs = self.abs();
        let plus = (abs / 2.0 + self.re / 2.0).sqrt();
        let minus = (abs / 2.0 - self.re / 2.0).sqrt();
        let re = if self.re >= 0.0 {
            plus
        } else {
            self.im.abs() / (2.0 * minus)
        };
        let im = if self.re <= 0.0 {
            minus
        } else {
            self.im.abs() / (2.0 * plus)
        };
        Complex::new(re, if self.im < 0.0 { -im } else { im })
    }

    pub fn exp(&self) -> Complex {
        let scale = self.re.exp();
        if self.im == 0.0 {
            return Complex::new(scale, 0.0);
        }
        Complex::new(scale * self.im.cos(), scale * self.im.sin())
    }

    /// `exp(self) - 1`, accurate near zero
    pub fn expm1(&self) -> Complex {
        Complex::new(
            self.re.exp_m1() * self.im.cos() + cos_m1(self.im),
            self.re.exp() * self.im.sin(),
        )
    }

    /// Natural logarithm, principal branch. `log(0)` is the real singularity
    /// `(-∞, 0)`.
    pub fn log(&self) -> Complex {
        if self.is_zero() {
            return Complex::new(self.re.ln(), 0.0);
        }
        Complex::new(log_norm(self.re, self.im), self.arg())
    }

    fn round_with(&self, places: i32, f: fn(f64) -> f64) -> Complex {
        let scale = 10f64.powi(places);
        Complex::new(f(self.re * scale) / scale, f(self.im * scale) / scale)
    }

    pub fn ceil(&self, places: i32) -> Complex {
        self.round_with(places, f64::ceil)
    }

    pub fn floor(&self, places: i32) -> Complex {
        self.round_with(places, f64::floor)
    }

    /// Round both components to `places` decimals, halves away from zero
    pub fn round(&self, places: i32) -> Complex {
        self.round_with(places, f64::round)
    }

    /// Componentwise comparison within [`Complex::EPSILON`].
    pub fn equals(&self, other: impl Into<Complex>) -> bool {
        let z = other.into();
        (z.re - self.re).abs() <= Complex::EPSILON && (z.im - self.im).abs() <= Complex::EPSILON
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.re, self.im]
    }

    /// The real part when `self` lies on the real axis
    pub fn to_real(&self) -> Option<f64> {
        if self.im == 0.0 {
            Some(self.re)
        } else {
            None
        }
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::new(re, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

impl From<[f64; 2]> for Complex {
    fn from([re, im]: [f64; 2]) -> Self {
        Complex::new(re, im)
    }
}

impl From<Complex64> for Complex {
    fn from(z: Complex64) -> Self {
        Complex::new(z.re, z.im)
    }
}

impl From<Complex> for Complex64 {
    fn from(z: Complex) -> Self {
        Complex64::new(z.re, z.im)
    }
}

impl TryFrom<&str> for Complex {
    type Error = ComplexError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Complex::parse(s)
    }
}
