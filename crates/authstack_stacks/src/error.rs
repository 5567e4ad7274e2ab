//! Error types for stack recipes.

use thiserror::Error;

/// Result type alias for stack builds.
pub type StackResult<T> = Result<T, StackError>;

/// Errors that can abort a stack build.
///
/// All variants surface to the caller unmodified; nothing is caught or
/// retried inside a recipe. A failed build exposes no partial graph.
#[derive(Error, Debug)]
pub enum StackError {
    #[error(transparent)]
    Config(#[from] authstack_core::CoreError),

    #[error(transparent)]
    Template(#[from] authstack_config::TemplateError),

    #[error(transparent)]
    Asset(#[from] authstack_assets::AssetError),

    #[error(transparent)]
    Graph(#[from] authstack_graph::GraphError),
}
