//! Login-flow actions stack.
//!
//! Deploys a set of post-login actions from a declarative table, then binds
//! them to the login trigger in table order.

use serde_json::json;
use tracing::info;

use authstack_config::NodeRuntime;
use authstack_core::{logical_id, ProviderBinding, PROVIDER_ENV};
use authstack_graph::{AttrValue, ResourceKind, StackBuilder, StackDefinition};

use crate::context::StackContext;
use crate::error::StackResult;
use crate::recipes::attrs;

struct ActionSpec {
    label: &'static str,
    display_name: &'static str,
    src: &'static str,
    dependencies: &'static [(&'static str, &'static str)],
    secrets: &'static [(&'static str, &'static str)],
}

const ENABLED_ACTIONS: [ActionSpec; 2] = [
    ActionSpec {
        label: "action-console-log-1",
        display_name: "Console Log Action 1",
        src: "console-log.js",
        dependencies: &[("lodash", "latest"), ("request", "latest")],
        secrets: &[("secret-1", "password"), ("secret-2", "password")],
    },
    ActionSpec {
        label: "action-console-log-2",
        display_name: "Console Log Action 2",
        src: "console-log.js",
        dependencies: &[("auth0", "latest")],
        secrets: &[("secret-3", "password"), ("secret-4", "password")],
    },
];

pub fn build(name: &str, ctx: &StackContext) -> StackResult<StackDefinition> {
    ctx.env().require_all(&PROVIDER_ENV)?;
    info!("Building stack '{name}'");

    let provider = ProviderBinding::from_env(ctx.env())?;
    let mut stack = StackBuilder::new(name, provider);

    // Create actions
    let mut bindings = Vec::new();
    for action in &ENABLED_ACTIONS {
        let code = ctx.assets().content("actions", action.src)?;
        let dependencies: Vec<_> = action
            .dependencies
            .iter()
            .map(|(dep, version)| json!({"name": dep, "version": version}))
            .collect();
        let secrets: Vec<_> = action
            .secrets
            .iter()
            .map(|(secret, value)| json!({"name": secret, "value": value}))
            .collect();

        let handle = stack.add(
            ResourceKind::Action,
            logical_id(name, action.label),
            attrs([
                ("name", AttrValue::string(action.display_name)),
                ("runtime", AttrValue::string(NodeRuntime::Node18.as_str())),
                ("deploy", AttrValue::bool(true)),
                ("code", AttrValue::string(code)),
                (
                    "supported_triggers",
                    AttrValue::from(json!({"id": "post-login", "version": "v3"})),
                ),
                ("dependencies", AttrValue::from(json!(dependencies))),
                ("secrets", AttrValue::from(json!(secrets))),
            ]),
        )?;

        bindings.push(AttrValue::Object(attrs([
            ("id", handle.output("id").into()),
            ("display_name", AttrValue::string(action.display_name)),
        ])));
    }

    // Add the created actions to the login flow
    stack.add(
        ResourceKind::TriggerBinding,
        logical_id(name, "trigger-binding"),
        attrs([
            ("trigger", AttrValue::string("post-login")),
            ("actions", AttrValue::List(bindings)),
        ]),
    )?;

    Ok(stack.finish())
}
