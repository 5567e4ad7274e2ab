//! Resource descriptors and the finished stack definition.

use serde::{Deserialize, Serialize};

use authstack_core::ProviderBinding;

use crate::kind::ResourceKind;
use crate::value::ConfigMap;

/// One provider resource: kind, locally unique logical id, and its merged
/// configuration. Output attributes are addressed by name through
/// [`crate::ResourceHandle::output`], not declared up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub kind: ResourceKind,
    pub logical_id: String,
    pub config: ConfigMap,
}

/// The finished, dependency-ordered resource graph of one stack run.
///
/// Owned exclusively by the build that produced it; handed to the external
/// provisioning engine, which resolves references and applies the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackDefinition {
    pub name: String,
    pub provider: ProviderBinding,
    pub resources: Vec<ResourceDescriptor>,
}

impl StackDefinition {
    /// Look up a descriptor by logical id.
    pub fn resource(&self, logical_id: &str) -> Option<&ResourceDescriptor> {
        self.resources.iter().find(|r| r.logical_id == logical_id)
    }

    /// Descriptors of a given kind, in build order.
    pub fn resources_of_kind(&self, kind: ResourceKind) -> Vec<&ResourceDescriptor> {
        self.resources.iter().filter(|r| r.kind == kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authstack_core::EnvValues;

    fn provider() -> ProviderBinding {
        let env = EnvValues::from_iter([
            ("DOMAIN", "d"),
            ("CLIENT_ID", "c"),
            ("CLIENT_SECRET", "s"),
        ]);
        ProviderBinding::from_env(&env).unwrap()
    }

    #[test]
    fn test_lookup_by_logical_id() {
        let definition = StackDefinition {
            name: "demo".to_string(),
            provider: provider(),
            resources: vec![ResourceDescriptor {
                kind: ResourceKind::Client,
                logical_id: "demo-client".to_string(),
                config: ConfigMap::new(),
            }],
        };

        assert!(definition.resource("demo-client").is_some());
        assert!(definition.resource("demo-api").is_none());
        assert_eq!(definition.resources_of_kind(ResourceKind::Client).len(), 1);
        assert!(definition
            .resources_of_kind(ResourceKind::Tenant)
            .is_empty());
    }
}
