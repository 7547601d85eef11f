use thiserror::Error;

/// Precondition failures raised by the grid engine.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}
