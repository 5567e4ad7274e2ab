//! # authstack_assets
//!
//! Local asset resolution for stack recipes.
//!
//! Recipes embed script and HTML content into resource attributes. Assets
//! live under one root with a fixed subdirectory per category (`rules`,
//! `errors`, `actions`, `classic-ul`); a missing file fails the build step
//! that needed it, with the files actually present listed in the error.
//!
//! Also derives deterministic avatar URLs from a seed string — URL
//! construction only, never network I/O.

pub mod avatar;
pub mod error;
pub mod store;

pub use avatar::avatar_url;
pub use error::{AssetError, AssetResult};
pub use store::AssetStore;
