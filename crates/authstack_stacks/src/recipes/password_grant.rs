//! Password-grant stack.
//!
//! Regular-web client with the resource-owner password grants, a database
//! connection that becomes the tenant's default directory, and a user.

use tracing::info;

use authstack_config::{GrantType, SessionCookieMode};
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

    // Application with password + refresh-token grants
    let grants: Vec<GrantType> = GrantType::password_grants()
        .into_iter()
        .chain([GrantType::RefreshToken])
        .collect();
    let client_label = logical_id(name, "client");
    let client = stack.add(
        ResourceKind::Client,
        client_label.as_str(),
        templated(
            ResourceKind::Client,
            "rwa",
            attrs([
                ("name", AttrValue::string(client_label.as_str())),
                (
                    "grant_types",
                    AttrValue::strings(grants.iter().map(GrantType::as_str)),
                ),
            ]),
        )?,
    )?;

    // Connection
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

    // Tenant defaults to the new connection for password logins
    stack.add(
        ResourceKind::Tenant,
        logical_id(name, "tenant"),
        attrs([
            ("default_directory", connection.output("name").into()),
            (
                "session_cookie",
                AttrValue::Object(attrs([(
                    "mode",
                    AttrValue::string(SessionCookieMode::Persistent.as_str()),
                )])),
            ),
        ]),
    )?;

    // User in the created connection
    stack.add(
        ResourceKind::User,
        logical_id(name, "user"),
        templated(
            ResourceKind::User,
            "john",
            attrs([("connection_name", connection.output("name").into())]),
        )?,
    )?;

    Ok(stack.finish())
}
