//! Shared pair catalog.
//!
//! - `DefaultCatalog::init_custom(toml_content)` installs a custom table; it
//!   fails once the shared converter exists
//! - `DefaultCatalog::global()` returns `&'static Converter`, built from the
//!   embedded table on first use unless a custom one was installed
//! - Default pairs are embedded via `include_str!("default_pairs.toml")`

mod config;

use std::sync::OnceLock;

use crate::converter::Converter;

pub use config::{parse_pairs_builder, parse_pairs_toml, CatalogError};

pub const DEFAULT_PAIRS_TOML: &str = include_str!("default_pairs.toml");

// Single write-once cell: either `init_custom` or the first `global()` fills it.
static INSTANCE: OnceLock<Converter> = OnceLock::new();

/// Returns the embedded default pair table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_PAIRS_TOML
}

pub struct DefaultCatalog;

impl DefaultCatalog {
    /// Install a custom pair table as the shared converter.
    ///
    /// Fails with `AlreadyInitialized` if the shared converter was already
    /// built, by an earlier `init_custom` or by a `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), CatalogError> {
        if INSTANCE.get().is_some() {
            return Err(CatalogError::AlreadyInitialized);
        }
        let table = parse_pairs_toml(&toml_content)?;
        INSTANCE
            .set(Converter::new(table))
            .map_err(|_| CatalogError::AlreadyInitialized)
    }

    /// Get or initialize the shared converter.
    pub fn global() -> &'static Converter {
        INSTANCE.get_or_init(Self::standard)
    }

    /// Build an unshared converter from the embedded default table.
    pub fn standard() -> Converter {
        let table = parse_pairs_toml(DEFAULT_PAIRS_TOML).expect("pair table TOML must be valid");
        Converter::new(table)
    }
}
