//! Custom error page stack.
//!
//! Single-page application, API, database connection, an unverified user,
//! a force-email-verification rule, and tenant settings pointing at a
//! custom error page.

use tracing::info;

use authstack_config::SessionCookieMode;
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
            "spa",
            attrs([("name", AttrValue::string(client_label.as_str()))]),
        )?,
    )?;

    // API
    let api_label = logical_id(name, "api");
    stack.add(
        ResourceKind::ResourceServer,
        api_label.as_str(),
        templated(
            ResourceKind::ResourceServer,
            "default",
            attrs([
                ("name", AttrValue::string(api_label.as_str())),
                ("identifier", AttrValue::string(format!("https://{name}"))),
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

    // User starts unverified so the rule below has something to enforce
    stack.add(
        ResourceKind::User,
        logical_id(name, "user"),
        templated(
            ResourceKind::User,
            "john",
            attrs([
                ("connection_name", connection.output("name").into()),
                ("email_verified", AttrValue::bool(false)),
            ]),
        )?,
    )?;

    // Force email verification rule
    let rule_script = ctx.assets().content("rules", "force-email-verification.js")?;
    stack.add(
        ResourceKind::Rule,
        logical_id(name, "rule"),
        attrs([
            ("name", AttrValue::string("Force Email Verification")),
            ("script", AttrValue::string(rule_script)),
            ("enabled", AttrValue::bool(true)),
        ]),
    )?;

    // Tenant-wide custom error page
    let error_page = ctx.assets().content("errors", "custom-error-page.html")?;
    stack.add(
        ResourceKind::Tenant,
        logical_id(name, "tenant"),
        attrs([
            (
                "session_cookie",
                AttrValue::Object(attrs([(
                    "mode",
                    AttrValue::string(SessionCookieMode::Persistent.as_str()),
                )])),
            ),
            (
                "error_page",
                AttrValue::Object(attrs([
                    ("html", AttrValue::string(error_page)),
                    ("url", AttrValue::string("")),
                    ("show_log_link", AttrValue::bool(true)),
                ])),
            ),
        ]),
    )?;

    Ok(stack.finish())
}
