use simple_error::SimpleError;
use std::fmt;

/// Error raised while building a complex value from an input shape
#[derive(Clone, Debug, PartialEq)]
pub enum ComplexError {
    InvalidParameter(String),
}

impl ComplexError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ComplexError::InvalidParameter(msg.into())
    }
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexError::InvalidParameter(msg) => write!(f, "Invalid Parameter: {}", msg),
        }
    }
}

impl std::error::Error for ComplexError {}

impl From<SimpleError> for ComplexError {
    fn from(err: SimpleError) -> Self {
        ComplexError::InvalidParameter(err.as_str().to_string())
    }
}
