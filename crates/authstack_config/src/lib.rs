//! # authstack_config
//!
//! Default configuration templates and the merge rules stacks customize
//! them with.
//!
//! Templates are process-wide constants keyed by resource kind and variant
//! (for example client `native`, connection `sms`). A recipe looks one up,
//! merges its per-stack overrides on top, and feeds the result to the graph
//! builder. Merging is shallow: an override replaces the template's value
//! for that key wholesale, lists and nested objects included.
//!
//! ## Example
//!
//! ```rust
//! use authstack_config::registry;
//! use authstack_graph::{AttrValue, ConfigMap, ResourceKind};
//!
//! let template = registry().get(ResourceKind::Client, "native").unwrap();
//!
//! let mut overrides = ConfigMap::new();
//! overrides.insert("name".into(), AttrValue::string("my-app"));
//! let config = template.merge(overrides);
//!
//! assert_eq!(config.get("name"), Some(&AttrValue::string("my-app")));
//! assert_eq!(config.get("app_type"), Some(&AttrValue::string("native")));
//! ```

pub mod error;
pub mod registry;
pub mod template;
pub mod types;

pub use error::{TemplateError, TemplateResult};
pub use registry::{registry, TemplateRegistry};
pub use template::ConfigTemplate;
pub use types::{GrantType, NodeRuntime, SessionCookieMode};
