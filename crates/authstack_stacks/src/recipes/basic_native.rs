//! Basic native application stack.
//!
//! Native client, an API with a `transfer:funds` scope, a grant wiring the
//! two together, a database connection enabling both the new client and the
//! management client, and a user in that connection.

use serde_json::json;
use tracing::info;

use authstack_assets::avatar_url;
use authstack_core::{logical_id, ProviderBinding, PROVIDER_ENV};
use authstack_graph::{AttrValue, ResourceKind, StackBuilder, StackDefinition};

use crate::context::StackContext;
use crate::error::StackResult;
use crate::recipes::{attrs, templated};

pub fn build(name: &str, ctx: &StackContext) -> StackResult<StackDefinition> {
    ctx.env().require_all(&PROVIDER_ENV)?;
    info!("Building stack '{name}'");

    let provider = ProviderBinding::from_env(ctx.env())?;
    let mgmt_client_id = ctx.env().require("CLIENT_ID")?.to_string();
    let mut stack = StackBuilder::new(name, provider);

    // Application
    let client_label = logical_id(name, "client");
    let client = stack.add(
        ResourceKind::Client,
        client_label.as_str(),
        templated(
            ResourceKind::Client,
            "native",
            attrs([("name", AttrValue::string(client_label.as_str()))]),
        )?,
    )?;

    // API
    let api_label = logical_id(name, "api");
    let api = stack.add(
        ResourceKind::ResourceServer,
        api_label.as_str(),
        templated(
            ResourceKind::ResourceServer,
            "default",
            attrs([
                ("name", AttrValue::string(api_label.as_str())),
                ("identifier", AttrValue::string(format!("https://{name}"))),
                (
                    "scopes",
                    AttrValue::from(json!([
                        {"value": "transfer:funds", "description": "Transfer funds"}
                    ])),
                ),
            ]),
        )?,
    )?;

    // Grant API permissions to the application
    stack.add(
        ResourceKind::ClientGrant,
        logical_id(name, "client-grants"),
        attrs([
            ("client_id", client.output("client_id").into()),
            ("audience", api.output("identifier").into()),
            ("scope", AttrValue::strings(["transfer:funds"])),
        ]),
    )?;

    // Connection enabling both the new client and the management client
    let connection_label = logical_id(name, "connection");
    let connection = stack.add(
        ResourceKind::Connection,
        connection_label.as_str(),
        templated(
            ResourceKind::Connection,
            "auth0",
            attrs([
                ("name", AttrValue::string(connection_label.as_str())),
                (
                    "enabled_clients",
                    AttrValue::List(vec![
                        client.output("client_id").into(),
                        AttrValue::string(mgmt_client_id),
                    ]),
                ),
            ]),
        )?,
    )?;

    // User in the created connection
    stack.add(
        ResourceKind::User,
        logical_id(name, "user"),
        templated(
            ResourceKind::User,
            "john",
            attrs([
                ("connection_name", connection.output("name").into()),
                ("picture", AttrValue::string(avatar_url(name))),
            ]),
        )?,
    )?;

    Ok(stack.finish())
}
