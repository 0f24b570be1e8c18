//! Installing a custom table into the shared catalog.
//!
//! Lives in its own test binary so the process-wide converter starts empty.

use width_core::{CatalogError, DefaultCatalog};

#[test]
fn custom_table_replaces_default_once() {
    DefaultCatalog::init_custom(r#"pairs = [["Ｘ", "A"], ["ガ", "ｶﾞ"]]"#.to_string()).unwrap();

    let conv = DefaultCatalog::global();
    assert_eq!(conv.table().len(), 2);
    assert_eq!(conv.to_fullwidth("AｶﾞB"), "ＸガB");
    assert_eq!(conv.to_halfwidth("Ｘガ"), "Aｶﾞ");

    let err = DefaultCatalog::init_custom(r#"pairs = [["Ｙ", "A"]]"#.to_string()).unwrap_err();
    assert!(matches!(err, CatalogError::AlreadyInitialized));
    assert_eq!(DefaultCatalog::global().to_fullwidth("A"), "Ｘ");
}
