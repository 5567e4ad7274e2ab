//! Asset store over a fixed category directory layout.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{AssetError, AssetResult};

/// Asset categories recipes read from.
pub const CATEGORIES: [&str; 4] = ["rules", "errors", "actions", "classic-ul"];

/// Resolves asset files under one root directory.
///
/// Layout convention: one subdirectory per category, files referenced by
/// plain filename. The store never caches; every lookup reads from disk.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// Create a store rooted at the given assets directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of an asset, without checking existence.
    pub fn path(&self, category: &str, filename: &str) -> PathBuf {
        self.root.join(category).join(filename)
    }

    /// Read an asset's raw text content for embedding.
    pub fn content(&self, category: &str, filename: &str) -> AssetResult<String> {
        let path = self.path(category, filename);
        if !path.is_file() {
            return Err(AssetError::NotFound {
                category: category.to_string(),
                filename: filename.to_string(),
                available: self.list(category),
            });
        }
        debug!("Reading asset {:?}", path);
        Ok(fs::read_to_string(path)?)
    }

    /// Filenames present in a category, sorted. Empty when the category
    /// directory does not exist.
    pub fn list(&self, category: &str) -> Vec<String> {
        let dir = self.root.join(category);
        let mut names: Vec<String> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
