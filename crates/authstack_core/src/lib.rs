//! # authstack_core
//!
//! Environment handling and identifier generation for authstack.
//!
//! This crate provides the leaf utilities every stack recipe depends on:
//! an explicit environment snapshot with fail-fast validation, the
//! deterministic logical-id generator, and the provider binding shared by
//! all resources in a stack.
//!
//! ## Example
//!
//! ```rust
//! use authstack_core::{logical_id, EnvValues, ProviderBinding};
//!
//! let env = EnvValues::from_iter([
//!     ("DOMAIN", "tenant.example.com"),
//!     ("CLIENT_ID", "abc"),
//!     ("CLIENT_SECRET", "s3cr3t"),
//! ]);
//!
//! env.require_all(&["DOMAIN", "CLIENT_ID", "CLIENT_SECRET"]).unwrap();
//! let provider = ProviderBinding::from_env(&env).unwrap();
//!
//! assert_eq!(logical_id("basic-native", "client"), "basic-native-client");
//! assert_eq!(provider.domain, "tenant.example.com");
//! ```

pub mod env;
pub mod error;
pub mod ident;
pub mod provider;

pub use env::EnvValues;
pub use error::{CoreError, CoreResult};
pub use ident::logical_id;
pub use provider::{ProviderBinding, PROVIDER_ENV};
