//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::ReconstructionError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("no solution: {0}")]
    Reconstruction(#[from] ReconstructionError),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
