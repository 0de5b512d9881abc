//! Data-driven content definitions and loaders.
//!
//! This crate reads static game content from RON/TOML data files:
//! - Item catalogs (RON)
//! - Enemy templates with loot tables (RON)
//! - World locations (RON)
//! - Level thresholds (TOML)
//! - Game configuration (TOML)
//!
//! Content is consumed by runtime oracles and never appears in player records.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentBundle, ContentFactory, EnemyLoader, ItemLoader, LevelLoader,
    LocationLoader,
};
