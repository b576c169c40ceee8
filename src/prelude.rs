//! cmplx prelude.
//!
//! This module contains the most used types, traits, functions,
//! and macros that you can import easily as a group.
//!
//! ```
//! use cmplx::prelude::*;
//!
//! let z = Complex::parse("3 - 6i").unwrap() * Complex::I;
//! assert_eq!(z, complex!(6, 3));
//! ```

#[doc(no_inline)]
pub use crate::complex;
#[doc(no_inline)]
pub use crate::complex::Complex;

#[doc(no_inline)]
pub use crate::error::ComplexError;

#[doc(no_inline)]
pub use crate::input::{build, ComplexBuilder, ComplexInput};

#[doc(no_inline)]
pub use crate::literal::parse_literal;

#[doc(no_inline)]
pub use num_traits::{Inv, One, Pow, Zero};
