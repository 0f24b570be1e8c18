pub mod convert_ops;
pub mod table_ops;

use std::fs;

use width_engine::{parse_pairs_toml, CatalogError, Converter, DefaultCatalog};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

/// Converter over a custom TOML table, or the shared default catalog.
#[derive(Debug)]
pub enum TableSource {
    Default,
    Custom(Converter),
}

impl TableSource {
    pub fn converter(&self) -> &Converter {
        match self {
            TableSource::Default => DefaultCatalog::global(),
            TableSource::Custom(conv) => conv,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Catalog(#[from] CatalogError),
}

pub fn load_table(path: Option<&str>) -> Result<TableSource, LoadError> {
    let Some(path) = path else {
        return Ok(TableSource::Default);
    };
    let content = fs::read_to_string(path)?;
    let table = parse_pairs_toml(&content)?;
    Ok(TableSource::Custom(Converter::new(table)))
}

pub fn open_table(path: Option<&str>) -> TableSource {
    die!(load_table(path), "Error loading pair table: {}")
}
