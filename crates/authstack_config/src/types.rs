//! Provider-specific enumerations used across templates and recipes.

use serde::{Deserialize, Serialize};

/// OAuth grant types a client can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrantType {
    AuthorizationCode,
    ClientCredentials,
    Implicit,
    Password,
    PasswordRealm,
    PasswordlessOtp,
    RefreshToken,
}

impl GrantType {
    /// Wire value the platform expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::AuthorizationCode => "authorization_code",
            GrantType::ClientCredentials => "client_credentials",
            GrantType::Implicit => "implicit",
            GrantType::Password => "password",
            GrantType::PasswordRealm => "http://auth0.com/oauth/grant-type/password-realm",
            GrantType::PasswordlessOtp => "http://auth0.com/oauth/grant-type/passwordless/otp",
            GrantType::RefreshToken => "refresh_token",
        }
    }

    /// The grant types needed for resource-owner password login.
    pub fn password_grants() -> Vec<GrantType> {
        vec![GrantType::Password, GrantType::PasswordRealm]
    }
}

impl std::fmt::Display for GrantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tenant session cookie persistence modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionCookieMode {
    Persistent,
    NonPersistent,
}

impl SessionCookieMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionCookieMode::Persistent => "persistent",
            SessionCookieMode::NonPersistent => "non-persistent",
        }
    }
}

/// Node runtimes available for action scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeRuntime {
    Node16,
    Node18,
}

impl NodeRuntime {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeRuntime::Node16 => "node16",
            NodeRuntime::Node18 => "node18",
        }
    }
}
