//! # authstack_stacks
//!
//! The bundled stack recipes and their registry.
//!
//! A recipe is one declarative build: validate required environment inputs
//! (fail-fast, before any resource exists), construct the provider binding,
//! then add resource descriptors in program order, wiring later resources
//! to earlier outputs through references. A build either returns a complete
//! [`authstack_graph::StackDefinition`] or fails without exposing a partial
//! graph.
//!
//! ## Example
//!
//! ```rust
//! use authstack_assets::AssetStore;
//! use authstack_core::EnvValues;
//! use authstack_stacks::{recipe, StackContext};
//!
//! let env = EnvValues::from_iter([
//!     ("DOMAIN", "tenant.example.com"),
//!     ("CLIENT_ID", "c1"),
//!     ("CLIENT_SECRET", "s1"),
//! ]);
//! let ctx = StackContext::new(env, AssetStore::new("assets"));
//!
//! let definition = recipe("basic-native").unwrap().run(&ctx).unwrap();
//! assert_eq!(definition.name, "basic-native");
//! ```

pub mod context;
pub mod error;
pub mod recipes;
pub mod registry;

pub use context::StackContext;
pub use error::{StackError, StackResult};
pub use registry::{recipe, recipes, Recipe, RecipeFn};
