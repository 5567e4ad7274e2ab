//! Shared collaborators a recipe builds against.

use authstack_assets::AssetStore;
use authstack_core::EnvValues;

/// Injected dependencies for one or more stack builds: the environment
/// snapshot taken at process start and the asset store. No recipe touches
/// the process environment or the filesystem through any other path.
#[derive(Debug, Clone)]
pub struct StackContext {
    env: EnvValues,
    assets: AssetStore,
}

impl StackContext {
    pub fn new(env: EnvValues, assets: AssetStore) -> Self {
        Self { env, assets }
    }

    pub fn env(&self) -> &EnvValues {
        &self.env
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }
}
