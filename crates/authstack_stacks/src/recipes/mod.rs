//! The bundled stack recipes.
//!
//! Each recipe is a plain function over injected collaborators: it
//! validates its environment requirements, constructs the provider binding,
//! then adds resources in program order so later resources can reference
//! earlier outputs.

use authstack_config::registry;
use authstack_graph::{AttrValue, ConfigMap, ResourceKind};

use crate::error::StackResult;

pub mod actions;
pub mod basic_native;
pub mod custom_error_page;
pub mod password_grant;
pub mod passwordless_sms;

/// Build a config map from literal entries.
pub(crate) fn attrs<const N: usize>(entries: [(&str, AttrValue); N]) -> ConfigMap {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Look up a template and merge recipe overrides on top.
pub(crate) fn templated(
    kind: ResourceKind,
    variant: &str,
    overrides: ConfigMap,
) -> StackResult<ConfigMap> {
    Ok(registry().get(kind, variant)?.merge(overrides))
}
