//! Fullwidth/halfwidth scanning over a frozen `PairTable`.

use crate::table::PairTable;

/// Converts text between fullwidth and halfwidth forms using one frozen table.
///
/// Both directions are total: unmapped scalars pass through unchanged and no
/// call returns an error.
#[derive(Debug, Clone)]
pub struct Converter {
    table: PairTable,
}

impl Converter {
    pub fn new(table: PairTable) -> Self {
        Converter { table }
    }

    pub fn table(&self) -> &PairTable {
        &self.table
    }

    /// Halfwidth → fullwidth, longest match first.
    ///
    /// A two-scalar window (e.g. "ｶﾞ") is tried before the single scalar so a
    /// base katakana followed by a voicing mark becomes one precomposed scalar.
    pub fn to_fullwidth(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars.len() {
            if i + 1 < chars.len() {
                if let Some(full) = self.table.fullwidth_of_two(chars[i], chars[i + 1]) {
                    out.push(full);
                    i += 2;
                    continue;
                }
            }
            out.push(self.table.fullwidth_of_one(chars[i]).unwrap_or(chars[i]));
            i += 1;
        }
        out
    }

    /// Fullwidth → halfwidth. Every fullwidth key is one scalar, so no lookahead.
    pub fn to_halfwidth(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.table.halfwidth_of(c) {
                Some(half) => half.push_to(&mut out),
                None => out.push(c),
            }
        }
        out
    }

    /// Nullable form of [`Converter::to_fullwidth`]: `None` maps to `None`.
    pub fn to_fullwidth_opt(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.to_fullwidth(t))
    }

    /// Nullable form of [`Converter::to_halfwidth`]: `None` maps to `None`.
    pub fn to_halfwidth_opt(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.to_halfwidth(t))
    }
}
