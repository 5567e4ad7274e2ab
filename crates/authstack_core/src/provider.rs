//! Provider binding shared by every resource in a stack.

use serde::{Deserialize, Serialize};

use crate::env::EnvValues;
use crate::error::CoreResult;

/// Environment names the provider binding is sourced from.
pub const PROVIDER_ENV: [&str; 3] = ["DOMAIN", "CLIENT_ID", "CLIENT_SECRET"];

/// Credential and endpoint context for the identity-platform provider.
///
/// Fields come only from a validated [`EnvValues`] snapshot, never from
/// literals in a recipe.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderBinding {
    pub domain: String,
    pub client_id: String,
    pub client_secret: String,
}

impl ProviderBinding {
    /// Build the binding from environment values.
    ///
    /// Fails with the first missing name in [`PROVIDER_ENV`] order.
    pub fn from_env(env: &EnvValues) -> CoreResult<Self> {
        Ok(Self {
            domain: env.require("DOMAIN")?.to_string(),
            client_id: env.require("CLIENT_ID")?.to_string(),
            client_secret: env.require("CLIENT_SECRET")?.to_string(),
        })
    }
}

impl std::fmt::Debug for ProviderBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderBinding")
            .field("domain", &self.domain)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_from_env() {
        let env = EnvValues::from_iter([
            ("DOMAIN", "tenant.example.com"),
            ("CLIENT_ID", "c1"),
            ("CLIENT_SECRET", "s1"),
        ]);
        let binding = ProviderBinding::from_env(&env).unwrap();
        assert_eq!(binding.domain, "tenant.example.com");
        assert_eq!(binding.client_id, "c1");
        assert_eq!(binding.client_secret, "s1");
    }

    #[test]
    fn test_from_env_missing_secret() {
        let env = EnvValues::from_iter([
            ("DOMAIN", "tenant.example.com"),
            ("CLIENT_ID", "c1"),
            ("CLIENT_SECRET", ""),
        ]);
        let err = ProviderBinding::from_env(&env).unwrap_err();
        assert!(matches!(err, CoreError::MissingEnv(ref n) if n == "CLIENT_SECRET"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let env = EnvValues::from_iter([
            ("DOMAIN", "d"),
            ("CLIENT_ID", "c"),
            ("CLIENT_SECRET", "hunter2"),
        ]);
        let binding = ProviderBinding::from_env(&env).unwrap();
        let dbg = format!("{binding:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("<redacted>"));
    }
}
