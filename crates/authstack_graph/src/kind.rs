//! Provider resource kinds.

use serde::{Deserialize, Serialize};

/// Kinds of identity-platform resources a stack can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    /// An application (client) registered with the platform.
    Client,
    /// An API (resource server) with its scopes.
    ResourceServer,
    /// A grant allowing a client to call an API.
    ClientGrant,
    /// A user store connection (database, SMS, ...).
    Connection,
    /// A user inside a connection.
    User,
    /// A legacy login-pipeline rule script.
    Rule,
    /// Tenant-wide settings.
    Tenant,
    /// A login-flow action script.
    Action,
    /// Binding of actions to a login-flow trigger.
    TriggerBinding,
    /// The tenant's global client (classic login page).
    GlobalClient,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Client => "client",
            ResourceKind::ResourceServer => "resource-server",
            ResourceKind::ClientGrant => "client-grant",
            ResourceKind::Connection => "connection",
            ResourceKind::User => "user",
            ResourceKind::Rule => "rule",
            ResourceKind::Tenant => "tenant",
            ResourceKind::Action => "action",
            ResourceKind::TriggerBinding => "trigger-binding",
            ResourceKind::GlobalClient => "global-client",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "client" => Some(ResourceKind::Client),
            "resource-server" => Some(ResourceKind::ResourceServer),
            "client-grant" => Some(ResourceKind::ClientGrant),
            "connection" => Some(ResourceKind::Connection),
            "user" => Some(ResourceKind::User),
            "rule" => Some(ResourceKind::Rule),
            "tenant" => Some(ResourceKind::Tenant),
            "action" => Some(ResourceKind::Action),
            "trigger-binding" => Some(ResourceKind::TriggerBinding),
            "global-client" => Some(ResourceKind::GlobalClient),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
