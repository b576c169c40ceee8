//! Arithmetic with the extended-value policy: infinities and zeros are
//! checked, in order, before the finite formula runs.

use super::Complex;
use num_traits::{Inv, One, Pow, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

fn add(a: Complex, b: Complex) -> Complex {
    if a.is_infinite() && b.is_infinite() {
        return Complex::NAN;
    }
    if a.is_infinite() || b.is_infinite() {
        return Complex::INFINITY;
    }
    Complex::new(a.re + b.re, a.im + b.im)
}

fn sub(a: Complex, b: Complex) -> Complex {
    if a.is_infinite() && b.is_infinite() {
        return Complex::NAN;
    }
    if a.is_infinite() || b.is_infinite() {
        return Complex::INFINITY;
    }
    Complex::new(a.re - b.re, a.im - b.im)
}

fn mul(a: Complex, b: Complex) -> Complex {
    if (a.is_infinite() && b.is_zero()) || (a.is_zero() && b.is_infinite()) {
        return Complex::NAN;
    }
    if a.is_infinite() || b.is_infinite() {
        return Complex::INFINITY;
    }
    if a.im == 0.0 && b.im == 0.0 {
        return Complex::new(a.re * b.re, 0.0);
    }
    Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
}

fn div(a: Complex, b: Complex) -> Complex {
    if (a.is_zero() && b.is_zero()) || (a.is_infinite() && b.is_infinite()) {
        return Complex::NAN;
    }
    if a.is_infinite() {
        return Complex::INFINITY;
    }
    if a.is_zero() || b.is_infinite() {
        return Complex::ZERO;
    }
    if b.is_zero() {
        // signed zero divisor: non-zero components go to ±∞
        return Complex::new(
            if a.re != 0.0 { a.re / b.re } else { 0.0 },
            if a.im != 0.0 { a.im / b.re } else { 0.0 },
        );
    }

    // halve both operands near the top of the range so the Smith sums stay finite
    let big = a.re.abs().max(a.im.abs()).max(b.re.abs()).max(b.im.abs());
    let (a, b) = if big > f64::MAX / 2.0 {
        (
            Complex::new(a.re * 0.5, a.im * 0.5),
            Complex::new(b.re * 0.5, b.im * 0.5),
        )
    } else {
        (a, b)
    };

    // Smith's algorithm, scaled by the larger divisor component
    if b.re.abs() < b.im.abs() {
        let x = b.re / b.im;
        let t = b.re * x + b.im;
        Complex::new((a.re * x + a.im) / t, (a.im * x - a.re) / t)
    } else {
        let x = b.im / b.re;
        let t = b.im * x + b.re;
        Complex::new((a.re + a.im * x) / t, (a.im - a.re * x) / t)
    }
}

impl<T: Into<Complex>> Add<T> for Complex {
    type Output = Complex;

    fn add(self, other: T) -> Complex {
        add(self, other.into())
    }
}

impl<T: Into<Complex>> Sub<T> for Complex {
    type Output = Complex;

    fn sub(self, other: T) -> Complex {
        sub(self, other.into())
    }
}

impl<T: Into<Complex>> Mul<T> for Complex {
    type Output = Complex;

    fn mul(self, other: T) -> Complex {
        mul(self, other.into())
    }
}

impl<T: Into<Complex>> Div<T> for Complex {
    type Output = Complex;

    fn div(self, other: T) -> Complex {
        div(self, other.into())
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        add(self.into(), other)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        sub(self.into(), other)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        mul(self.into(), other)
    }
}

impl Div<Complex> for f64 {
    type Output = Complex;

    fn div(self, other: Complex) -> Complex {
        div(self.into(), other)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl<T: Into<Complex>> AddAssign<T> for Complex {
    fn add_assign(&mut self, other: T) {
        *self = add(*self, other.into());
    }
}

impl<T: Into<Complex>> SubAssign<T> for Complex {
    fn sub_assign(&mut self, other: T) {
        *self = sub(*self, other.into());
    }
}

impl<T: Into<Complex>> MulAssign<T> for Complex {
    fn mul_assign(&mut self, other: T) {
        *self = mul(*self, other.into());
    }
}

impl<T: Into<Complex>> DivAssign<T> for Complex {
    fn div_assign(&mut self, other: T) {
        *self = div(*self, other.into());
    }
}

impl Pow<Complex> for Complex {
    type Output = Complex;

    fn pow(self, exponent: Complex) -> Complex {
        Complex::pow(self, exponent)
    }
}

impl Pow<f64> for Complex {
    type Output = Complex;

    fn pow(self, exponent: f64) -> Complex {
        Complex::pow(self, exponent)
    }
}

impl Inv for Complex {
    type Output = Complex;

    fn inv(self) -> Complex {
        self.inverse()
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        Complex::is_zero(self)
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }
}
