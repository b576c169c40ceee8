//! Normalization of every supported input shape into a rectangular
//! [`Complex`].
//!
//! Shapes are a closed set ([`ComplexInput`]), each with exactly one
//! conversion. Record-shaped input (named `re`/`im`, `abs`/`arg`, `r`/`phi`
//! fields) goes through [`ComplexBuilder`], which resolves to one of the
//! rectangular or polar variants.
//!
//! Apart from the two-scalar rectangular fast path and copies of an existing
//! value, a construction that produces a NaN component is rejected.

use crate::complex::Complex;
use crate::error::ComplexError;
use crate::literal::parse_literal;
use simple_error::{bail, SimpleError};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ComplexInput {
    RectangularPair(f64, f64),
    PolarAbsArg { abs: f64, arg: f64 },
    PolarRPhi { r: f64, phi: f64 },
    ScalarReal(f64),
    PairSequence(Vec<f64>),
    LiteralString(String),
    ExistingComplex(Complex),
    #[default]
    Empty,
}

impl ComplexInput {
    fn shape(&self) -> &'static str {
        match self {
            ComplexInput::RectangularPair(..) => "rectangular pair",
            ComplexInput::PolarAbsArg { .. } => "abs/arg polar pair",
            ComplexInput::PolarRPhi { .. } => "r/phi polar pair",
            ComplexInput::ScalarReal(_) => "real scalar",
            ComplexInput::PairSequence(_) => "sequence",
            ComplexInput::LiteralString(_) => "literal",
            ComplexInput::ExistingComplex(_) => "complex value",
            ComplexInput::Empty => "empty input",
        }
    }
}

impl From<f64> for ComplexInput {
    fn from(x: f64) -> Self {
        ComplexInput::ScalarReal(x)
    }
}

impl From<(f64, f64)> for ComplexInput {
    fn from((re, im): (f64, f64)) -> Self {
        ComplexInput::RectangularPair(re, im)
    }
}

impl From<[f64; 2]> for ComplexInput {
    fn from(pair: [f64; 2]) -> Self {
        ComplexInput::PairSequence(pair.to_vec())
    }
}

impl From<Vec<f64>> for ComplexInput {
    fn from(seq: Vec<f64>) -> Self {
        ComplexInput::PairSequence(seq)
    }
}

impl From<&[f64]> for ComplexInput {
    fn from(seq: &[f64]) -> Self {
        ComplexInput::PairSequence(seq.to_vec())
    }
}

impl From<&str> for ComplexInput {
    fn from(s: &str) -> Self {
        ComplexInput::LiteralString(s.to_string())
    }
}

impl From<String> for ComplexInput {
    fn from(s: String) -> Self {
        ComplexInput::LiteralString(s)
    }
}

impl From<Complex> for ComplexInput {
    fn from(z: Complex) -> Self {
        ComplexInput::ExistingComplex(z)
    }
}

impl From<&Complex> for ComplexInput {
    fn from(z: &Complex) -> Self {
        ComplexInput::ExistingComplex(*z)
    }
}

impl From<()> for ComplexInput {
    fn from(_: ()) -> Self {
        ComplexInput::Empty
    }
}

fn checked(z: Complex, shape: &str) -> Result<Complex, ComplexError> {
    if z.is_nan() {
        tracing::debug!(shape, "construction produced a NaN component");
        return Err(ComplexError::invalid(format!("{} produces NaN", shape)));
    }
    Ok(z)
}

fn from_polar(mag: f64, angle: f64) -> Complex {
    if mag.is_infinite() && angle.is_finite() {
        return Complex::INFINITY;
    }
    Complex::new(mag * angle.cos(), mag * angle.sin())
}

fn from_sequence(seq: &[f64]) -> Result<Complex, SimpleError> {
    match seq {
        [re, im] => Ok(Complex::new(*re, *im)),
        _ => bail!("sequence of length {} is not a complex pair", seq.len()),
    }
}

/// Normalize any supported input shape into a complex value.
///
/// ```
/// use cmplx::input::{build, ComplexInput};
///
/// assert_eq!(build("3 - 6i").unwrap().im(), -6.0);
/// assert_eq!(build(ComplexInput::PolarRPhi { r: 2.0, phi: 0.0 }).unwrap().re(), 2.0);
/// assert!(build(vec![1.0, 2.0, 3.0]).is_err());
/// ```
pub fn build(input: impl Into<ComplexInput>) -> Result<Complex, ComplexError> {
    let input = input.into();
    let shape = input.shape();
    match input {
        ComplexInput::RectangularPair(re, im) => Ok(Complex::new(re, im)),
        ComplexInput::ExistingComplex(z) => Ok(z),
        ComplexInput::Empty => Ok(Complex::ZERO),
        ComplexInput::PolarAbsArg { abs, arg } => checked(from_polar(abs, arg), shape),
        ComplexInput::PolarRPhi { r, phi } => checked(from_polar(r, phi), shape),
        ComplexInput::ScalarReal(x) => checked(Complex::new(x, 0.0), shape),
        ComplexInput::PairSequence(seq) => {
            let z = from_sequence(&seq).map_err(|err| {
                tracing::debug!(len = seq.len(), "rejected sequence input");
                ComplexError::from(err)
            })?;
            checked(z, shape)
        }
        ComplexInput::LiteralString(s) => {
            let (re, im) = parse_literal(&s).map_err(|err| {
                tracing::debug!(literal = s.as_str(), %err, "rejected literal input");
                err
            })?;
            checked(Complex::new(re, im), shape)
        }
    }
}

/// Record-shaped input with optional named fields.
///
/// `re`/`im` wins over the polar forms, and `r`/`phi` wins over `abs`/`arg`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComplexBuilder {
    re: Option<f64>,
    im: Option<f64>,
    abs: Option<f64>,
    arg: Option<f64>,
    r: Option<f64>,
    phi: Option<f64>,
}

impl ComplexBuilder {
    pub fn new() -> Self {
        ComplexBuilder::default()
    }

    pub fn re(mut self, re: f64) -> Self {
        self.re = Some(re);
        self
    }

    pub fn im(mut self, im: f64) -> Self {
        self.im = Some(im);
        self
    }

    pub fn abs(mut self, abs: f64) -> Self {
        self.abs = Some(abs);
        self
    }

    pub fn arg(mut self, arg: f64) -> Self {
        self.arg = Some(arg);
        self
    }

    pub fn r(mut self, r: f64) -> Self {
        self.r = Some(r);
        self
    }

    pub fn phi(mut self, phi: f64) -> Self {
        self.phi = Some(phi);
        self
    }

    /// Resolve the populated fields to a single input shape.
    pub fn input(&self) -> Result<ComplexInput, ComplexError> {
        match (self.re, self.im, self.r, self.phi, self.abs, self.arg) {
            (Some(re), Some(im), ..) => Ok(ComplexInput::RectangularPair(re, im)),
            (_, _, Some(r), Some(phi), ..) => Ok(ComplexInput::PolarRPhi { r, phi }),
            (_, _, _, _, Some(abs), Some(arg)) => Ok(ComplexInput::PolarAbsArg { abs, arg }),
            _ => {
                tracing::debug!(record = ?self, "unrecognized record shape");
                Err(ComplexError::invalid(
                    "record needs re/im, r/phi or abs/arg fields",
                ))
            }
        }
    }

    pub fn build(self) -> Result<Complex, ComplexError> {
        let z = build(self.input()?)?;
        checked(z, "record")
    }
}
