//! Environment snapshot with fail-fast validation.
//!
//! Stacks never read the process environment directly. A snapshot is taken
//! once at process start and passed by reference into every build, so tests
//! can construct arbitrary environments without touching globals.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// An immutable snapshot of named configuration inputs.
///
/// A value counts as missing when the name is absent or maps to the empty
/// string; both cases fail validation identically.
#[derive(Debug, Clone, Default)]
pub struct EnvValues {
    values: BTreeMap<String, String>,
}

impl EnvValues {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        let values = std::env::vars().collect();
        Self { values }
    }

    /// Build a snapshot from explicit pairs. Primarily for tests and
    /// embedding callers.
    pub fn from_iter<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }

    /// Get a value, treating the empty string as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Get a value or fail with the variable's name.
    pub fn require(&self, name: &str) -> CoreResult<&str> {
        self.get(name)
            .ok_or_else(|| CoreError::MissingEnv(name.to_string()))
    }

    /// Validate that every name resolves to a non-empty value.
    ///
    /// Checks names in the given order and fails on the first missing one;
    /// later names are not inspected. This runs before any resource is
    /// built, so a failed validation never leaves a partial stack behind.
    pub fn require_all(&self, names: &[&str]) -> CoreResult<()> {
        for name in names {
            self.require(name)?;
        }
        debug!("Validated {} environment inputs", names.len());
        Ok(())
    }

    /// Number of values in the snapshot.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnvValues {
        EnvValues::from_iter([
            ("DOMAIN", "tenant.example.com"),
            ("CLIENT_ID", "c1"),
            ("EMPTY", ""),
        ])
    }

    #[test]
    fn test_get_treats_empty_as_absent() {
        let env = sample();
        assert_eq!(env.get("DOMAIN"), Some("tenant.example.com"));
        assert_eq!(env.get("EMPTY"), None);
        assert_eq!(env.get("NOPE"), None);
    }

    #[test]
    fn test_require_all_passes_when_present() {
        let env = sample();
        assert!(env.require_all(&["DOMAIN", "CLIENT_ID"]).is_ok());
    }

    #[test]
    fn test_require_all_reports_first_missing_in_order() {
        let env = sample();
        let err = env
            .require_all(&["DOMAIN", "EMPTY", "NOPE"])
            .unwrap_err();
        assert_eq!(err.variable(), Some("EMPTY"));
        assert_eq!(
            err.to_string(),
            "The environment variable EMPTY must be set."
        );
    }

    #[test]
    fn test_require_all_order_matters() {
        let env = EnvValues::default();
        let err = env.require_all(&["B", "A"]).unwrap_err();
        assert_eq!(err.variable(), Some("B"));
    }
}
