//! Attribute values and deferred cross-resource references.
//!
//! A resource attribute is either concrete data known at build time or a
//! [`Reference`] to an output of an earlier resource, resolved only by the
//! external provisioning engine at apply time. References are a distinct
//! variant, never plain strings, so a recipe cannot accidentally treat an
//! unresolved value as data.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Attribute map of a resource configuration.
pub type ConfigMap = BTreeMap<String, AttrValue>;

/// An opaque handle to an output attribute of a previously built resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Logical id of the resource whose output is referenced.
    pub resource: String,
    /// Name of the referenced output attribute.
    pub attribute: String,
}

impl Reference {
    pub fn new(resource: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            attribute: attribute.into(),
        }
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.resource, self.attribute)
    }
}

// Serialized as {"$ref": {"resource": ..., "attribute": ...}} so the
// apply-time engine can tell deferred values apart from ordinary objects.
// Deserialization goes through a map-only visitor: logical ids embed the
// caller-chosen stack name, so no string format (and no non-map shape) may
// be mistaken for a reference.
#[derive(Serialize, Deserialize)]
struct RefTarget {
    resource: String,
    attribute: String,
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let target = RefTarget {
            resource: self.resource.clone(),
            attribute: self.attribute.clone(),
        };
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("$ref", &target)?;
        map.end()
    }
}

struct RefVisitor;

impl<'de> serde::de::Visitor<'de> for RefVisitor {
    type Value = Reference;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a map with a single \"$ref\" entry")
    }

    fn visit_map<A: serde::de::MapAccess<'de>>(self, mut map: A) -> Result<Reference, A::Error> {
        let mut target: Option<RefTarget> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "$ref" {
                target = Some(map.next_value()?);
            } else {
                return Err(A::Error::custom(format!("unexpected key '{key}'")));
            }
        }
        let target = target.ok_or_else(|| A::Error::missing_field("$ref"))?;
        Ok(Reference {
            resource: target.resource,
            attribute: target.attribute,
        })
    }
}

impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RefVisitor)
    }
}

/// A single attribute value of a resource configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Deferred output of an earlier resource.
    Ref(Reference),
    /// List of values, each of which may itself be deferred.
    List(Vec<AttrValue>),
    /// Nested attribute object (option bag).
    Object(ConfigMap),
    /// Concrete scalar (string, number, bool, null).
    Value(serde_json::Value),
}

impl AttrValue {
    /// Convenience constructor for string attributes.
    pub fn string(value: impl Into<String>) -> Self {
        AttrValue::Value(serde_json::Value::String(value.into()))
    }

    /// Convenience constructor for boolean attributes.
    pub fn bool(value: bool) -> Self {
        AttrValue::Value(serde_json::Value::Bool(value))
    }

    /// List of string attributes.
    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttrValue::List(values.into_iter().map(AttrValue::string).collect())
    }

    /// Collect every reference contained in this value, depth first.
    pub fn references(&self) -> Vec<&Reference> {
        let mut refs = Vec::new();
        self.collect_references(&mut refs);
        refs
    }

    fn collect_references<'a>(&'a self, refs: &mut Vec<&'a Reference>) {
        match self {
            AttrValue::Ref(r) => refs.push(r),
            AttrValue::List(items) => {
                for item in items {
                    item.collect_references(refs);
                }
            }
            AttrValue::Object(map) => {
                for value in map.values() {
                    value.collect_references(refs);
                }
            }
            AttrValue::Value(_) => {}
        }
    }

    /// Nested object entries, if this value is an object.
    pub fn as_object(&self) -> Option<&ConfigMap> {
        match self {
            AttrValue::Object(map) => Some(map),
            _ => None,
        }
    }
}

// Arrays and objects are normalized into List/Object variants so that
// references can be nested anywhere and serialization stays canonical.
impl From<serde_json::Value> for AttrValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(items) => {
                AttrValue::List(items.into_iter().map(AttrValue::from).collect())
            }
            serde_json::Value::Object(entries) => AttrValue::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, AttrValue::from(v)))
                    .collect(),
            ),
            scalar => AttrValue::Value(scalar),
        }
    }
}

impl From<Reference> for AttrValue {
    fn from(reference: Reference) -> Self {
        AttrValue::Ref(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_serializes_tagged() {
        let value = AttrValue::Ref(Reference::new("stack-client", "client_id"));
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(
            json,
            json!({"$ref": {"resource": "stack-client", "attribute": "client_id"}})
        );
    }

    #[test]
    fn test_list_of_dotted_strings_stays_list() {
        // A URI-style callback must never be mistaken for a reference.
        let value = AttrValue::strings(["com.example.app://callback"]);
        let text = serde_json::to_string(&value).unwrap();
        let back: AttrValue = serde_json::from_str(&text).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_dotted_resource_id_roundtrip() {
        // Stack names are caller input and may contain dots; they end up
        // embedded in logical ids.
        let value = AttrValue::Ref(Reference::new("my.stack-client", "client_id"));
        let text = serde_json::to_string(&value).unwrap();
        let back: AttrValue = serde_json::from_str(&text).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_reference_roundtrip() {
        let value = AttrValue::List(vec![
            AttrValue::Ref(Reference::new("a", "id")),
            AttrValue::string("literal"),
        ]);
        let text = serde_json::to_string(&value).unwrap();
        let back: AttrValue = serde_json::from_str(&text).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_from_json_normalizes_containers() {
        let value = AttrValue::from(json!({"scopes": ["a", "b"], "deep": {"x": 1}}));
        let obj = value.as_object().unwrap();
        assert!(matches!(obj.get("scopes"), Some(AttrValue::List(_))));
        assert!(matches!(obj.get("deep"), Some(AttrValue::Object(_))));
    }

    #[test]
    fn test_references_collects_nested() {
        let value = AttrValue::Object(ConfigMap::from([(
            "enabled_clients".to_string(),
            AttrValue::List(vec![
                AttrValue::Ref(Reference::new("c", "client_id")),
                AttrValue::string("env-client"),
            ]),
        )]));
        let refs = value.references();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].resource, "c");
    }

    #[test]
    fn test_reference_rejects_non_map_shapes() {
        for shape in [
            json!("a.b"),
            json!(["a.b"]),
            json!({"$ref": "a.b"}),
            json!({"other": {"resource": "a", "attribute": "b"}}),
        ] {
            let result: Result<Reference, _> = serde_json::from_value(shape.clone());
            assert!(result.is_err(), "accepted {shape}");
        }
    }
}
