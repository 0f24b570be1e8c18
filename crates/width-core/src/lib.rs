pub mod catalog;
pub mod converter;
pub mod pair;
pub mod table;
pub mod unicode;


pub use catalog::{CatalogError, DefaultCatalog};
pub use converter::Converter;
pub use pair::{Halfwidth, Pair};
pub use table::{PairTable, PairTableBuilder, TableError};
