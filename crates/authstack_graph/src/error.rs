//! Error types for the graph module.

use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while building a resource graph.
///
/// Both variants indicate an ordering or naming bug in a stack recipe, not
/// a runtime condition; they abort the build immediately.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Duplicate logical id in stack '{stack}': {logical_id}")]
    DuplicateId { stack: String, logical_id: String },

    #[error(
        "Resource '{consumer}' references {referenced}.{attribute}, which is not built yet"
    )]
    ForwardReference {
        consumer: String,
        referenced: String,
        attribute: String,
    },
}
