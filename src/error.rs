// error.rs - Failure modes of the leeway pipeline
//
// Every failure is a precondition violation. Nothing is retried.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeewayError {
    /// Malformed domain bounds or sample count for an axis.
    #[error("invalid {axis} range: {reason}")]
    InvalidRange { axis: &'static str, reason: String },

    /// A speed cell is zero, the formula would divide by zero.
    #[error("speed is zero at grid cell ({row}, {col})")]
    DivisionByZero { row: usize, col: usize },

    /// Speed and heel grids disagree on shape.
    #[error("grid shape mismatch: speed {speed:?}, heel {heel:?}")]
    ShapeMismatch {
        speed: (usize, usize),
        heel: (usize, usize),
    },

    /// Leeway coefficient is NaN or infinite.
    #[error("leeway coefficient must be finite, got {0}")]
    InvalidCoefficient(f64),
}

impl LeewayError {
    pub fn invalid_range(axis: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            axis,
            reason: reason.into(),
        }
    }
}
