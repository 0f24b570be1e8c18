//! Fullwidth/halfwidth character conversion.
//!
//! Re-exports the `width_core` API and adds process-wide helpers over the
//! default catalog.

mod trace_init;

pub use trace_init::init_tracing;
pub use width_core::catalog::{self, parse_pairs_toml, CatalogError, DefaultCatalog};
pub use width_core::{
    converter, pair, table, unicode, Converter, Halfwidth, Pair, PairTable, PairTableBuilder,
    TableError,
};

/// Halfwidth → fullwidth using the shared default catalog.
pub fn to_fullwidth(text: &str) -> String {
    DefaultCatalog::global().to_fullwidth(text)
}

/// Fullwidth → halfwidth using the shared default catalog.
pub fn to_halfwidth(text: &str) -> String {
    DefaultCatalog::global().to_halfwidth(text)
}
