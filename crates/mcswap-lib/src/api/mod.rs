//! # API Module
//!
//! Mod catalog access.
//!
//! ## Modules
//!
//! - [`modrinth`] - Catalog client trait with live (HTTP) and mock implementations
//! - [`catalog`] - Compatibility filtering, game version options and downloads

pub mod catalog;
pub mod modrinth;

pub use catalog::{
    DEFAULT_SEARCH_LIMIT, FALLBACK_GAME_VERSIONS, download_compatible, download_to_profile,
    filter_compatible, find_compatible_mods, game_version_options, release_versions,
};
pub use modrinth::{
    CatalogClient, CatalogEntry, CatalogError, DEFAULT_MODRINTH_URL, GameVersionTag,
    LiveModrinthClient, MockModrinthClient, ModVersion, VersionFile,
};
