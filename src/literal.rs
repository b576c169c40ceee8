//! Tokenizer and sign-run accumulator for textual complex literals such as
//! `"3 + 4i"`, `"-2i"` or `"1e-3 - 5i"`.
//!
//! Grammar: `literal := term (sign_run term)*`, `term := number | number? ('i'|'I')`,
//! `sign_run := ('+'|'-')+`, whitespace allowed between tokens. A leading
//! implicit `+` lets the first term omit its sign.

use crate::error::ComplexError;
use regex::Regex;
use simple_error::{bail, SimpleError};
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\d+\.?\d*e[+-]?\d+|\d+\.?\d*|\.\d+|.").expect("Invalid regex!")
});

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token<'a> {
    Number(&'a str),
    Space,
    Plus,
    Minus,
    Imag,
    Other(char),
}

impl<'a> Token<'a> {
    fn classify(text: &'a str) -> Token<'a> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => Token::Number(text),
            (Some('+'), None) => Token::Plus,
            (Some('-'), None) => Token::Minus,
            (Some('i'), None) | (Some('I'), None) => Token::Imag,
            (Some(c), None) if c.is_whitespace() => Token::Space,
            (Some(c), None) => Token::Other(c),
            _ => Token::Number(text),
        }
    }
}

fn tokenize(s: &str) -> Vec<Token<'_>> {
    TOKEN_RE
        .find_iter(s)
        .map(|m| Token::classify(m.as_str()))
        .collect()
}

fn number(text: &str) -> Result<f64, SimpleError> {
    match text.parse::<f64>() {
        Ok(x) => Ok(x),
        Err(_) => bail!("malformed number '{}'", text),
    }
}

/// Running state of the automaton: pending sign counts and the partial sums.
#[derive(Debug)]
struct Accumulator {
    plus: usize,
    minus: usize,
    re: f64,
    im: f64,
}

impl Accumulator {
    fn new() -> Self {
        Accumulator {
            plus: 1,
            minus: 0,
            re: 0.0,
            im: 0.0,
        }
    }

    fn pending(&self) -> bool {
        self.plus + self.minus > 0
    }

    fn term(&mut self, value: f64, imaginary: bool) -> Result<(), SimpleError> {
        if !self.pending() {
            bail!("term without a preceding sign");
        }
        let value = if self.minus % 2 == 1 { -value } else { value };
        if imaginary {
            self.im += value;
        } else {
            self.re += value;
        }
        self.plus = 0;
        self.minus = 0;
        Ok(())
    }

    fn finish(self) -> Result<(f64, f64), SimpleError> {
        if self.pending() {
            bail!("dangling sign run at end of literal");
        }
        Ok((self.re, self.im))
    }
}

fn accumulate(tokens: &[Token<'_>]) -> Result<(f64, f64), SimpleError> {
    if tokens.is_empty() {
        bail!("empty literal");
    }
    let mut acc = Accumulator::new();
    let mut iter = tokens.iter().peekable();
    while let Some(token) = iter.next() {
        match *token {
            Token::Space => {}
            Token::Plus => acc.plus += 1,
            Token::Minus => acc.minus += 1,
            Token::Imag => {
                let coeff = match iter.peek() {
                    Some(Token::Number(text)) => {
                        let coeff = number(text)?;
                        iter.next();
                        coeff
                    }
                    _ => 1.0,
                };
                acc.term(coeff, true)?;
            }
            Token::Number(text) => {
                let value = number(text)?;
                let imaginary = matches!(iter.peek(), Some(Token::Imag));
                if imaginary {
                    iter.next();
                }
                acc.term(value, imaginary)?;
            }
            Token::Other(c) => bail!("unexpected character '{}'", c),
        }
    }
    acc.finish()
}

/// Parse a complex literal into its `(re, im)` components.
///
/// ```
/// use cmplx::literal::parse_literal;
///
/// assert_eq!(parse_literal("3 - 6i").unwrap(), (3.0, -6.0));
/// assert_eq!(parse_literal("++++--+1").unwrap(), (1.0, 0.0));
/// assert!(parse_literal("3 + 4i +").is_err());
/// ```
pub fn parse_literal(s: &str) -> Result<(f64, f64), ComplexError> {
    let tokens = tokenize(s);
    let parts = accumulate(&tokens)?;
    tracing::trace!(literal = s, tokens = tokens.len(), "parsed complex literal");
    Ok(parts)
}
