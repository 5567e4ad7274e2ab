//! Stack graph builder.
//!
//! Resources are added in program order; each addition validates that every
//! reference inside the configuration names a resource already present, so
//! the finished graph is acyclic without a separate topological sort.

use std::collections::HashSet;

use tracing::debug;

use authstack_core::ProviderBinding;

use crate::descriptor::{ResourceDescriptor, StackDefinition};
use crate::error::{GraphError, GraphResult};
use crate::kind::ResourceKind;
use crate::value::{ConfigMap, Reference};

/// Handle to a built resource, used to mint references to its outputs.
#[derive(Debug, Clone)]
pub struct ResourceHandle {
    logical_id: String,
}

impl ResourceHandle {
    /// Logical id of the resource this handle points to.
    pub fn id(&self) -> &str {
        &self.logical_id
    }

    /// Reference to one of this resource's output attributes.
    pub fn output(&self, attribute: &str) -> Reference {
        Reference::new(self.logical_id.clone(), attribute)
    }
}

/// Accumulates resource descriptors for one stack run.
pub struct StackBuilder {
    name: String,
    provider: ProviderBinding,
    resources: Vec<ResourceDescriptor>,
    ids: HashSet<String>,
}

impl StackBuilder {
    /// Start a new stack graph over the given provider binding.
    pub fn new(name: impl Into<String>, provider: ProviderBinding) -> Self {
        Self {
            name: name.into(),
            provider,
            resources: Vec::new(),
            ids: HashSet::new(),
        }
    }

    /// Stack name the builder was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a resource descriptor.
    ///
    /// Fails when the logical id is already taken, or when any reference in
    /// `config` names a resource that has not been added yet.
    pub fn add(
        &mut self,
        kind: ResourceKind,
        logical_id: impl Into<String>,
        config: ConfigMap,
    ) -> GraphResult<ResourceHandle> {
        let logical_id = logical_id.into();

        if self.ids.contains(&logical_id) {
            return Err(GraphError::DuplicateId {
                stack: self.name.clone(),
                logical_id,
            });
        }

        for value in config.values() {
            for reference in value.references() {
                if !self.ids.contains(&reference.resource) {
                    return Err(GraphError::ForwardReference {
                        consumer: logical_id,
                        referenced: reference.resource.clone(),
                        attribute: reference.attribute.clone(),
                    });
                }
            }
        }

        debug!("Adding resource {kind} '{logical_id}'");
        self.ids.insert(logical_id.clone());
        self.resources.push(ResourceDescriptor {
            kind,
            logical_id: logical_id.clone(),
            config,
        });

        Ok(ResourceHandle { logical_id })
    }

    /// Finish the build and hand over the definition.
    pub fn finish(self) -> StackDefinition {
        debug!(
            "Stack '{}' complete with {} resources",
            self.name,
            self.resources.len()
        );
        StackDefinition {
            name: self.name,
            provider: self.provider,
            resources: self.resources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AttrValue;
    use authstack_core::EnvValues;

    fn builder() -> StackBuilder {
        let env = EnvValues::from_iter([
            ("DOMAIN", "d"),
            ("CLIENT_ID", "c"),
            ("CLIENT_SECRET", "s"),
        ]);
        StackBuilder::new("demo", ProviderBinding::from_env(&env).unwrap())
    }

    #[test]
    fn test_add_and_finish_preserve_order() {
        let mut stack = builder();
        stack
            .add(ResourceKind::Client, "demo-client", ConfigMap::new())
            .unwrap();
        stack
            .add(ResourceKind::Connection, "demo-connection", ConfigMap::new())
            .unwrap();

        let definition = stack.finish();
        let ids: Vec<_> = definition
            .resources
            .iter()
            .map(|r| r.logical_id.as_str())
            .collect();
        assert_eq!(ids, ["demo-client", "demo-connection"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut stack = builder();
        stack
            .add(ResourceKind::Client, "demo-client", ConfigMap::new())
            .unwrap();
        let err = stack
            .add(ResourceKind::User, "demo-client", ConfigMap::new())
            .unwrap_err();
        assert!(matches!(err, GraphError::DuplicateId { ref logical_id, .. }
            if logical_id == "demo-client"));
    }

    #[test]
    fn test_backward_reference_accepted() {
        let mut stack = builder();
        let client = stack
            .add(ResourceKind::Client, "demo-client", ConfigMap::new())
            .unwrap();

        let mut config = ConfigMap::new();
        config.insert(
            "enabled_clients".to_string(),
            AttrValue::List(vec![
                AttrValue::Ref(client.output("client_id")),
                AttrValue::string("other"),
            ]),
        );
        assert!(stack
            .add(ResourceKind::Connection, "demo-connection", config)
            .is_ok());
    }

    #[test]
    fn test_forward_reference_rejected() {
        let mut stack = builder();
        let mut config = ConfigMap::new();
        config.insert(
            "client_id".to_string(),
            AttrValue::Ref(Reference::new("demo-client", "client_id")),
        );

        let err = stack
            .add(ResourceKind::ClientGrant, "demo-grant", config)
            .unwrap_err();
        assert!(matches!(err, GraphError::ForwardReference { ref referenced, .. }
            if referenced == "demo-client"));
    }

    #[test]
    fn test_nested_forward_reference_rejected() {
        let mut stack = builder();
        let mut options = ConfigMap::new();
        options.insert(
            "audience".to_string(),
            AttrValue::Ref(Reference::new("demo-api", "identifier")),
        );
        let mut config = ConfigMap::new();
        config.insert("options".to_string(), AttrValue::Object(options));

        assert!(stack
            .add(ResourceKind::Connection, "demo-connection", config)
            .is_err());
    }
}
