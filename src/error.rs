use thiserror::Error;

/// Top-level error type for the geonum kernel.
#[derive(Debug, Error, PartialEq)]
pub enum GeonumError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors related to geometric value types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("index {index} is out of range for a {dim}-dimensional tuple")]
    IndexOutOfRange { index: usize, dim: usize },
}

/// Errors raised by the numeric engines.
#[derive(Debug, Error, PartialEq)]
pub enum NumericError {
    #[error("no {kind} stencil of derivative order {order} with {points} points")]
    UnsupportedStencil {
        kind: &'static str,
        order: usize,
        points: usize,
    },

    #[error("derivative order {order} is not supported (expected 1..={max})")]
    UnsupportedDerivativeOrder { order: usize, max: usize },

    #[error("root is not bracketed: f({lo}) = {f_lo}, f({hi}) = {f_hi}")]
    NotBracketed {
        lo: f64,
        hi: f64,
        f_lo: f64,
        f_hi: f64,
    },

    #[error("root finder exhausted {evaluations} function evaluations")]
    MaxEvaluations { evaluations: usize },

    #[error("invalid solver input: {0}")]
    InvalidInput(String),
}

/// Errors produced while parsing textual coordinates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} coordinates, found {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("unbalanced brackets in {0:?}")]
    UnbalancedBrackets(String),
}

/// Convenience type alias for results using [`GeonumError`].
pub type Result<T> = std::result::Result<T, GeonumError>;
