//! Error types for the assets module.

use thiserror::Error;

/// Result type alias for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;

/// Errors that can occur while resolving assets.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Asset not found: {category}/{filename} (available: {available:?})")]
    NotFound {
        category: String,
        filename: String,
        available: Vec<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
