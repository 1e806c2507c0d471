use std::num::ParseFloatError;

use thiserror::Error;

/// Top-level error type for the curvelab kernel.
#[derive(Debug, Error)]
pub enum CurvelabError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Invalid inputs detected while constructing or rebuilding a curve.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("got {points} points but {knots} knots")]
    LengthMismatch { points: usize, knots: usize },

    #[error("knots must be strictly increasing: knot {index} ({next}) follows {previous}")]
    KnotsNotIncreasing {
        index: usize,
        previous: f64,
        next: f64,
    },

    #[error("knot {index} is not a finite number")]
    NonFiniteKnot { index: usize },

    #[error("{family} needs at least {required} points, got {actual}")]
    TooFewPoints {
        family: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("tension {0} is out of range [0, 1]")]
    TensionOutOfRange(f64),

    #[error("control point index {index} is out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown hyperparameter: {0}")]
    UnknownHyperparameter(String),

    #[error("invalid value for hyperparameter {name}: {value}")]
    InvalidHyperparameterValue { name: &'static str, value: String },

    #[error("invalid parameter domain [{a}, {b}]")]
    InvalidDomain { a: f64, b: f64 },
}

/// Errors raised while reading textual point coordinates.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing coordinate: got {0} values, expected an even count")]
    OddCoordinateCount(usize),

    #[error("invalid coordinate {token:?}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("singular {size}x{size} system while solving spline derivatives")]
    SingularSystem { size: usize },
}

/// Convenience type alias for results using [`CurvelabError`].
pub type Result<T> = std::result::Result<T, CurvelabError>;
