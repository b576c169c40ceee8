use super::Complex;
use crate::math::{cosh, sinh};
use std::f64::consts::FRAC_PI_2;

impl Complex {
    pub fn sin(&self) -> Complex {
        let (a, b) = (self.re, self.im);
        Complex::new(a.sin() * cosh(b), a.cos() * sinh(b))
    }

    pub fn cos(&self) -> Complex {
        let (a, b) = (self.re, self.im);
        Complex::new(a.cos() * cosh(b), -a.sin() * sinh(b))
    }

    pub fn tan(&self) -> Complex {
        let a = 2.0 * self.re;
        let b = 2.0 * self.im;
        let d = a.cos() + cosh(b);
        Complex::new(a.sin() / d, sinh(b) / d)
    }

    pub fn cot(&self) -> Complex {
        let a = 2.0 * self.re;
        let b = 2.0 * self.im;
        let d = a.cos() - cosh(b);
        Complex::new(-a.sin() / d, sinh(b) / d)
    }

    pub fn sec(&self) -> Complex {
        let (a, b) = (self.re, self.im);
        let d = 0.5 * cosh(2.0 * b) + 0.5 * (2.0 * a).cos();
        Complex::new(a.cos() * cosh(b) / d, a.sin() * sinh(b) / d)
    }

    pub fn csc(&self) -> Complex {
        let (a, b) = (self.re, self.im);
        let d = 0.5 * cosh(2.0 * b) - 0.5 * (2.0 * a).cos();
        Complex::new(a.sin() * cosh(b) / d, -a.cos() * sinh(b) / d)
    }

    pub fn asin(&self) -> Complex {
        let (a, b) = (self.re, self.im);
        let t1 = Complex::new(b * b - a * a + 1.0, -2.0 * a * b).sqrt();
        let t2 = Complex::new(t1.re - b, t1.im + a).log();
        Complex::new(t2.im, -t2.re)
    }

    pub fn acos(&self) -> Complex {
        let (a, b) = (self.re, self.im);
        let t1 = Complex::new(b * b - a * a + 1.0, -2.0 * a * b).sqrt();
        let t2 = Complex::new(t1.re - b, t1.im + a).log();
        Complex::new(FRAC_PI_2 - t2.im, t2.re)
    }

    pub fn atan(&self) -> Complex {
        let (a, b) = (self.re, self.im);
        if a == 0.0 {
            if b == 1.0 {
                return Complex::new(0.0, f64::INFINITY);
            }
            if b == -1.0 {
                return Complex::new(0.0, f64::NEG_INFINITY);
            }
        }
        let d = a * a + (1.0 - b) * (1.0 - b);
        let t1 = Complex::new((1.0 - b * b - a * a) / d, -2.0 * a / d).log();
        Complex::new(-0.5 * t1.im, 0.5 * t1.re)
    }

    pub fn acot(&self) -> Complex {
        if self.im == 0.0 {
            return Complex::new(1f64.atan2(self.re), 0.0);
        }
        self.reciprocal().atan()
    }

    pub fn asec(&self) -> Complex {
        if self.is_zero() {
            return Complex::new(0.0, f64::INFINITY);
        }
        self.reciprocal().acos()
    }

    pub fn acsc(&self) -> Complex {
        if self.is_zero() {
            return Complex::new(FRAC_PI_2, f64::INFINITY);
        }
        self.reciprocal().asin()
    }

    pub fn sinh(&self) -> Complex {
        let (a, b) = (self.re, self.im);
        Complex::new(sinh(a) * b.cos(), cosh(a) * b.sin())
    }

    pub fn cosh(&self) -> Complex {
        let (a, b) = (self.re, self.im);
        Complex::new(cosh(a) * b.cos(), sinh(a) * b.sin())
    }

    pub fn tanh(&self) -> Complex {
        let a = 2.0 * self.re;
        let b = 2.0 * self.im;
        let d = cosh(a) + b.cos();
        Complex::new(sinh(a) / d, b.sin() / d)
    }

    pub fn coth(&self) -> Complex {
        let a = 2.0 * self.re;
        let b = 2.0 * self.im;
        let d = cosh(a) - b.cos();
        Complex::new(sinh(a) / d, -b.sin() / d)
    }

    pub fn sech(&self) -> Complex {
        let (a, b) = (self.re, self.im);
        let d = (2.0 * b).cos() + cosh(2.0 * a);
        Complex::new(2.0 * cosh(a) * b.cos() / d, -2.0 * sinh(a) * b.sin() / d)
    }

    pub fn csch(&self) -> Complex {
        let (a, b) = (self.re, self.im);
        let d = (2.0 * b).cos() - cosh(2.0 * a);
        Complex::new(-2.0 * sinh(a) * b.cos() / d, 2.0 * cosh(a) * b.sin() / d)
    }

    /// `asinh(z) = i·asin(-i·z)`
    pub fn asinh(&self) -> Complex {
        let w = Complex::new(self.im, -self.re).asin();
        Complex::new(-w.im, w.re)
    }

    pub fn acosh(&self) -> Complex {
        let w = self.acos();
        if w.im <= 0.0 {
            Complex::new(-w.im, w.re)
        } else {
            Complex::new(w.im, -w.re)
        }
    }

    /// `atanh(z) = -i·atan(i·z)`
    pub fn atanh(&self) -> Complex {
        let w = Complex::new(-self.im, self.re).atan();
        Complex::new(w.im, -w.re)
    }

    pub fn acoth(&self) -> Complex {
        if self.is_zero() {
            return Complex::new(0.0, FRAC_PI_2);
        }
        self.reciprocal().atanh()
    }

    pub fn acsch(&self) -> Complex {
        if self.im == 0.0 {
            let re = if self.re != 0.0 {
                (self.re + (self.re * self.re + 1.0).sqrt()).ln()
            } else {
                f64::INFINITY
            };
            return Complex::new(re, 0.0);
        }
        self.reciprocal().asinh()
    }

    pub fn asech(&self) -> Complex {
        if self.is_zero() {
            return Complex::INFINITY;
        }
        self.reciprocal().acosh()
    }
}
