//! Process-wide registry of default configuration templates.
//!
//! The registry is populated once and shared read-only by every stack
//! build; customization happens exclusively through the merge step.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::json;
use tracing::debug;

use authstack_graph::ResourceKind;

use crate::error::{TemplateError, TemplateResult};
use crate::template::ConfigTemplate;

/// A registry mapping (kind, variant) pairs to their default templates.
#[derive(Default)]
pub struct TemplateRegistry {
    templates: HashMap<(ResourceKind, String), ConfigTemplate>,
}

impl TemplateRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Register a template under its kind and variant.
    ///
    /// If a template with the same kind and variant already exists, it will
    /// be replaced.
    pub fn register(&mut self, template: ConfigTemplate) {
        let key = (template.kind(), template.variant().to_string());
        debug!("Registering template {}/{}", key.0, key.1);
        self.templates.insert(key, template);
    }

    /// Get a template, returning an error if the pair is unregistered.
    pub fn get(&self, kind: ResourceKind, variant: &str) -> TemplateResult<&ConfigTemplate> {
        self.templates
            .get(&(kind, variant.to_string()))
            .ok_or_else(|| TemplateError::UnknownTemplate {
                kind,
                variant: variant.to_string(),
                known: self.variants(kind),
            })
    }

    /// Registered variant names for a kind, sorted.
    pub fn variants(&self, kind: ResourceKind) -> Vec<String> {
        let mut names: Vec<String> = self
            .templates
            .keys()
            .filter(|(k, _)| *k == kind)
            .map(|(_, v)| v.clone())
            .collect();
        names.sort();
        names
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// The built-in templates, established once per process.
pub fn registry() -> &'static TemplateRegistry {
    static REGISTRY: OnceLock<TemplateRegistry> = OnceLock::new();
    REGISTRY.get_or_init(defaults)
}

fn defaults() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();

    registry.register(ConfigTemplate::new(
        ResourceKind::Client,
        "native",
        json!({
            "app_type": "native",
            "oidc_conformant": true,
            "grant_types": ["authorization_code", "refresh_token"],
            "token_endpoint_auth_method": "none",
            "callbacks": ["com.example.app://callback"],
        }),
    ));

    registry.register(ConfigTemplate::new(
        ResourceKind::Client,
        "spa",
        json!({
            "app_type": "spa",
            "oidc_conformant": true,
            "grant_types": ["authorization_code", "implicit", "refresh_token"],
            "token_endpoint_auth_method": "none",
            "callbacks": ["http://localhost:3000/callback"],
            "allowed_logout_urls": ["http://localhost:3000"],
            "web_origins": ["http://localhost:3000"],
        }),
    ));

    registry.register(ConfigTemplate::new(
        ResourceKind::Client,
        "rwa",
        json!({
            "app_type": "regular_web",
            "oidc_conformant": true,
            "grant_types": ["authorization_code", "client_credentials", "refresh_token"],
            "token_endpoint_auth_method": "client_secret_post",
            "callbacks": ["http://localhost:3000/callback"],
            "allowed_logout_urls": ["http://localhost:3000"],
        }),
    ));

    registry.register(ConfigTemplate::new(
        ResourceKind::ResourceServer,
        "default",
        json!({
            "signing_alg": "RS256",
            "token_lifetime": 86400,
            "allow_offline_access": false,
            "skip_consent_for_verifiable_first_party_clients": true,
        }),
    ));

    registry.register(ConfigTemplate::new(
        ResourceKind::Connection,
        "auth0",
        json!({
            "strategy": "auth0",
            "options": {
                "password_policy": "good",
                "brute_force_protection": true,
                "disable_signup": false,
            },
        }),
    ));

    registry.register(ConfigTemplate::new(
        ResourceKind::Connection,
        "sms",
        json!({
            "strategy": "sms",
            "name": "sms",
            "options": {
                "syntax": "md_with_macros",
                "template": "Your verification code is: @@password@@",
                "disable_signup": false,
                "brute_force_protection": true,
                "totp": {"time_step": 300, "length": 6},
            },
        }),
    ));

    registry.register(ConfigTemplate::new(
        ResourceKind::User,
        "john",
        json!({
            "name": "John Doe",
            "nickname": "johnny",
            "email": "john.doe@example.com",
            "email_verified": true,
            "password": "$uper$ecret123",
        }),
    ));

    registry.register(ConfigTemplate::new(
        ResourceKind::User,
        "passwordless-bo",
        json!({
            "name": "Bo",
            "nickname": "bo",
            "email_verified": false,
        }),
    ));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use authstack_graph::AttrValue;

    #[test]
    fn test_builtin_templates_registered() {
        let registry = registry();
        for (kind, variant) in [
            (ResourceKind::Client, "native"),
            (ResourceKind::Client, "spa"),
            (ResourceKind::Client, "rwa"),
            (ResourceKind::ResourceServer, "default"),
            (ResourceKind::Connection, "auth0"),
            (ResourceKind::Connection, "sms"),
            (ResourceKind::User, "john"),
            (ResourceKind::User, "passwordless-bo"),
        ] {
            assert!(registry.get(kind, variant).is_ok(), "{kind}/{variant}");
        }
    }

    #[test]
    fn test_unknown_variant_lists_known() {
        let err = registry()
            .get(ResourceKind::Client, "m2m")
            .unwrap_err();
        let TemplateError::UnknownTemplate { variant, known, .. } = err;
        assert_eq!(variant, "m2m");
        assert_eq!(known, ["native", "rwa", "spa"]);
    }

    #[test]
    fn test_native_client_defaults() {
        let template = registry().get(ResourceKind::Client, "native").unwrap();
        assert_eq!(template.attr("app_type"), Some(&AttrValue::string("native")));
    }

    #[test]
    fn test_lookup_returns_same_instance() {
        let a = registry().get(ResourceKind::User, "john").unwrap();
        let b = registry().get(ResourceKind::User, "john").unwrap();
        assert!(std::ptr::eq(a, b));
    }
}
