//! Error types for the config module.

use thiserror::Error;

use authstack_graph::ResourceKind;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template lookup.
///
/// An unknown template indicates a bug in a stack recipe, not a runtime
/// condition; recipes only name variants registered at startup.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("No {kind} template registered for variant '{variant}' (known: {known:?})")]
    UnknownTemplate {
        kind: ResourceKind,
        variant: String,
        known: Vec<String>,
    },
}
