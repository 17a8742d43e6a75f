use std::fmt;

/// Precondition violation of a fixed-point operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// The argument lies outside the range the approximation is defined for.
    Domain { op: &'static str, value: f64 },
    /// The divisor (or `cos` for `tan`) is exactly zero.
    DivisionByZero { op: &'static str },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::Domain { op, value } => {
                write!(f, "{op}: argument {value} is outside the supported domain")
            }
            MathError::DivisionByZero { op } => write!(f, "{op}: division by zero"),
        }
    }
}

impl std::error::Error for MathError {}

/// A string that is not a finite decimal number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFixedError {
    input: String,
}

impl ParseFixedError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseFixedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid fixed-point literal {:?}", self.input)
    }
}

impl std::error::Error for ParseFixedError {}
