use std::fs;

use width_engine::unicode::WidthClass;
use width_engine::{catalog, parse_pairs_toml, PairTable};

use super::{die, open_table};

pub fn table_export() {
    print!("{}", catalog::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(parse_pairs_toml(&content), "Error: {}");
    println!("OK: {} pairs", table.len());
}

/// One line per scalar of `query`: its class and the mapping in each direction.
///
/// A two-scalar halfwidth sequence starting at a position is reported on
/// that scalar's line.
pub fn lookup_lines(table: &PairTable, query: &str) -> Vec<String> {
    let chars: Vec<char> = query.chars().collect();
    let mut lines = Vec::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        let mut line = format!("U+{:04X} {c} [{}]", c as u32, WidthClass::of(c).label());
        if let Some(half) = table.halfwidth_of(c) {
            line.push_str(&format!(" half={half}"));
        }
        if let Some(full) = table.fullwidth_of_one(c) {
            line.push_str(&format!(" full={full}"));
        }
        if let Some(&next) = chars.get(i + 1) {
            if let Some(full) = table.fullwidth_of_two(c, next) {
                line.push_str(&format!(" full({c}{next})={full}"));
            }
        }
        lines.push(line);
    }
    lines
}

pub fn lookup_cmd(query: &str, table: Option<&str>) {
    let source = open_table(table);
    for line in lookup_lines(source.converter().table(), query) {
        println!("{line}");
    }
}
