//! Error types for the core module.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur during core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("The environment variable {0} must be set.")]
    MissingEnv(String),
}

impl CoreError {
    /// Name of the environment variable a `MissingEnv` error refers to.
    pub fn variable(&self) -> Option<&str> {
        match self {
            CoreError::MissingEnv(name) => Some(name),
        }
    }
}
