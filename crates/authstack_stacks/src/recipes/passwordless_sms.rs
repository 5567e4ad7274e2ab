//! Passwordless SMS stack.
//!
//! Regular-web client with implicit + passwordless-OTP grants, an API and
//! grant, an SMS connection wired to Twilio, a phone-only user, and the
//! global client carrying the classic passwordless login page.

use serde_json::json;
use tracing::info;

use authstack_config::GrantType;
use authstack_core::{logical_id, ProviderBinding};
use authstack_graph::{AttrValue, ResourceKind, StackBuilder, StackDefinition};

use crate::context::StackContext;
use crate::error::StackResult;
use crate::recipes::{attrs, templated};

/// Required environment inputs, validated in this order.
pub const REQUIRED_ENV: [&str; 7] = [
    "DOMAIN",
    "CLIENT_ID",
    "CLIENT_SECRET",
    "PASSWORDLESS_SMS_SEND_FROM_NUMBER",
    "PASSWORDLESS_SMS_USER_PHONE_NUMBER",
    "TWILIO_SID",
    "TWILIO_TOKEN",
];

pub fn build(name: &str, ctx: &StackContext) -> StackResult<StackDefinition> {
    ctx.env().require_all(&REQUIRED_ENV)?;
    info!("Building stack '{name}'");

    let provider = ProviderBinding::from_env(ctx.env())?;
    let env = ctx.env();
    let mgmt_client_id = env.require("CLIENT_ID")?.to_string();
    let send_from = env.require("PASSWORDLESS_SMS_SEND_FROM_NUMBER")?.to_string();
    let user_phone = env.require("PASSWORDLESS_SMS_USER_PHONE_NUMBER")?.to_string();
    let twilio_sid = env.require("TWILIO_SID")?.to_string();
    let twilio_token = env.require("TWILIO_TOKEN")?.to_string();

    let mut stack = StackBuilder::new(name, provider);

    // Application accepting passwordless OTP logins
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
                    AttrValue::strings([
                        GrantType::Implicit.as_str(),
                        GrantType::PasswordlessOtp.as_str(),
                    ]),
                ),
            ]),
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

    // Passwordless SMS connection; the template's option bag is spread and
    // overlaid with the Twilio wiring rather than replaced wholesale.
    let sms_template = authstack_config::registry().get(ResourceKind::Connection, "sms")?;
    let options = sms_template.spread(
        "options",
        attrs([
            ("from", AttrValue::string(send_from)),
            ("twilio_sid", AttrValue::string(twilio_sid)),
            ("twilio_token", AttrValue::string(twilio_token)),
        ]),
    );
    let connection = stack.add(
        ResourceKind::Connection,
        logical_id(name, "connection-sms"),
        sms_template.merge(attrs([
            ("options", options),
            (
                "enabled_clients",
                AttrValue::List(vec![
                    client.output("client_id").into(),
                    AttrValue::string(mgmt_client_id),
                ]),
            ),
        ])),
    )?;

    // User reachable over SMS only
    stack.add(
        ResourceKind::User,
        logical_id(name, "user"),
        templated(
            ResourceKind::User,
            "passwordless-bo",
            attrs([
                ("connection_name", connection.output("name").into()),
                ("phone_number", AttrValue::string(user_phone)),
            ]),
        )?,
    )?;

    // Enable the classic passwordless login page tenant-wide
    let login_page = ctx.assets().content("classic-ul", "login.passwordless.html")?;
    stack.add(
        ResourceKind::GlobalClient,
        logical_id(name, "globalclient"),
        attrs([
            ("custom_login_page_on", AttrValue::bool(true)),
            ("custom_login_page", AttrValue::string(login_page)),
        ]),
    )?;

    Ok(stack.finish())
}
