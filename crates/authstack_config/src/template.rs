//! Config templates and the shallow merge rule.

use authstack_graph::{AttrValue, ConfigMap, ResourceKind};

/// An immutable set of default attributes for one resource kind/variant.
///
/// Templates are never mutated after registration; every customization goes
/// through [`ConfigTemplate::merge`], which produces a fresh map.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigTemplate {
    kind: ResourceKind,
    variant: String,
    attrs: ConfigMap,
}

impl ConfigTemplate {
    /// Create a template from a JSON object of default attributes.
    ///
    /// Non-object defaults are rejected at registration time, which only
    /// happens from this crate's own registry setup.
    pub fn new(
        kind: ResourceKind,
        variant: impl Into<String>,
        defaults: serde_json::Value,
    ) -> Self {
        let attrs = match AttrValue::from(defaults) {
            AttrValue::Object(map) => map,
            _ => ConfigMap::new(),
        };
        Self {
            kind,
            variant: variant.into(),
            attrs,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Default value of one attribute.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Merge caller overrides on top of the defaults.
    ///
    /// Shallow by design: a key present in `overrides` replaces the
    /// template's value wholesale — lists are never concatenated and nested
    /// objects are never recursed into. Keys absent from `overrides` keep
    /// their default, so the result contains every key from both sides.
    pub fn merge(&self, overrides: ConfigMap) -> ConfigMap {
        let mut merged = self.attrs.clone();
        merged.extend(overrides);
        merged
    }

    /// Spread the template's nested object under `key` and overlay `extra`
    /// on it, reproducing the caller-level `{ ...defaults.options, ... }`
    /// convention for option bags.
    ///
    /// If the template has no object under `key`, the result is just
    /// `extra`.
    pub fn spread(&self, key: &str, extra: ConfigMap) -> AttrValue {
        let mut base = self
            .attr(key)
            .and_then(AttrValue::as_object)
            .cloned()
            .unwrap_or_default();
        base.extend(extra);
        AttrValue::Object(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template() -> ConfigTemplate {
        ConfigTemplate::new(
            ResourceKind::Connection,
            "sms",
            json!({
                "strategy": "sms",
                "enabled_clients": ["default"],
                "options": {"syntax": "md_with_macros", "disable_signup": false}
            }),
        )
    }

    #[test]
    fn test_merge_keeps_template_keys() {
        let t = template();
        let mut overrides = ConfigMap::new();
        overrides.insert("name".to_string(), AttrValue::string("custom"));

        let merged = t.merge(overrides);
        assert_eq!(merged.get("strategy"), Some(&AttrValue::string("sms")));
        assert_eq!(merged.get("name"), Some(&AttrValue::string("custom")));
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn test_merge_replaces_lists_wholesale() {
        let t = template();
        let mut overrides = ConfigMap::new();
        overrides.insert(
            "enabled_clients".to_string(),
            AttrValue::strings(["a", "b"]),
        );

        let merged = t.merge(overrides);
        assert_eq!(
            merged.get("enabled_clients"),
            Some(&AttrValue::strings(["a", "b"]))
        );
    }

    #[test]
    fn test_merge_replaces_nested_objects_wholesale() {
        let t = template();
        let mut overrides = ConfigMap::new();
        let mut options = ConfigMap::new();
        options.insert("from".to_string(), AttrValue::string("+15551234567"));
        overrides.insert("options".to_string(), AttrValue::Object(options.clone()));

        let merged = t.merge(overrides);
        // Shallow merge: the template's syntax/disable_signup keys are gone.
        assert_eq!(merged.get("options"), Some(&AttrValue::Object(options)));
    }

    #[test]
    fn test_spread_overlays_nested_defaults() {
        let t = template();
        let mut extra = ConfigMap::new();
        extra.insert("from".to_string(), AttrValue::string("+15551234567"));

        let options = t.spread("options", extra);
        let map = options.as_object().unwrap();
        assert_eq!(map.get("syntax"), Some(&AttrValue::string("md_with_macros")));
        assert_eq!(map.get("from"), Some(&AttrValue::string("+15551234567")));
    }

    #[test]
    fn test_merge_empty_overrides_is_identity() {
        let t = template();
        let merged = t.merge(ConfigMap::new());
        assert_eq!(merged.get("strategy"), Some(&AttrValue::string("sms")));
        assert_eq!(merged.len(), 3);
    }
}
