//! Data-driven content loaders.
//!
//! Session settings can live in a TOML file instead of being hard-coded:
//!
//! ```text
//! data_dir/
//! └── config.toml
//! ```
//!
//! All loaders deserialize lineage-core types directly via serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult};
