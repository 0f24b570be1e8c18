use serde::Deserialize;

use crate::table::{PairTable, PairTableBuilder, TableError};

#[derive(Deserialize)]
struct PairsConfig {
    // array (not a table) so registration order survives parsing
    pairs: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("pair #{index} ({fullwidth:?}, {halfwidth:?}): {source}")]
    InvalidPair {
        index: usize,
        fullwidth: String,
        halfwidth: String,
        #[source]
        source: TableError,
    },
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("pair table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a builder, keeping the order of the `pairs` array.
pub fn parse_pairs_builder(toml_str: &str) -> Result<PairTableBuilder, CatalogError> {
    let config: PairsConfig =
        toml::from_str(toml_str).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let mut builder = PairTableBuilder::new();
    for (index, (fullwidth, halfwidth)) in config.pairs.into_iter().enumerate() {
        if let Err(source) = builder.add(&fullwidth, &halfwidth) {
            return Err(CatalogError::InvalidPair {
                index,
                fullwidth,
                halfwidth,
                source,
            });
        }
    }
    Ok(builder)
}

/// Parse TOML text into a frozen `PairTable`.
pub fn parse_pairs_toml(toml_str: &str) -> Result<PairTable, CatalogError> {
    Ok(parse_pairs_builder(toml_str)?.build()?)
}
