//! # authstack_graph
//!
//! Resource descriptors, deferred references and the stack graph builder.
//!
//! A stack is built strictly in program order: each resource may reference
//! output attributes of resources added before it, so build order *is*
//! dependency order and the resulting graph is acyclic by construction.
//! The builder rejects duplicate logical ids and references to resources
//! that have not been added yet.
//!
//! ## Example
//!
//! ```rust
//! use authstack_core::{EnvValues, ProviderBinding};
//! use authstack_graph::{AttrValue, ConfigMap, ResourceKind, StackBuilder};
//!
//! let env = EnvValues::from_iter([
//!     ("DOMAIN", "d"),
//!     ("CLIENT_ID", "c"),
//!     ("CLIENT_SECRET", "s"),
//! ]);
//! let provider = ProviderBinding::from_env(&env).unwrap();
//!
//! let mut stack = StackBuilder::new("demo", provider);
//! let client = stack
//!     .add(ResourceKind::Client, "demo-client", ConfigMap::new())
//!     .unwrap();
//!
//! let mut grant = ConfigMap::new();
//! grant.insert("client_id".into(), AttrValue::Ref(client.output("client_id")));
//! stack
//!     .add(ResourceKind::ClientGrant, "demo-grant", grant)
//!     .unwrap();
//!
//! let definition = stack.finish();
//! assert_eq!(definition.resources.len(), 2);
//! ```

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod kind;
pub mod value;

pub use builder::{ResourceHandle, StackBuilder};
pub use descriptor::{ResourceDescriptor, StackDefinition};
pub use error::{GraphError, GraphResult};
pub use kind::ResourceKind;
pub use value::{AttrValue, ConfigMap, Reference};
