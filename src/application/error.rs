use thiserror::Error;

use crate::domain::GridError;

/// Errors that can occur when starting a simulation.
#[derive(Debug, Error, PartialEq)]
pub enum LifeError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
