//! Pair registration and the frozen lookup table.
//!
//! - `PairTableBuilder` accumulates distinct pairs in registration order
//! - `build()` freezes them into a `PairTable` with two indices
//!   (fullwidth → halfwidth, halfwidth → fullwidth)
//! - Duplicate keys in either index resolve to the first-registered pair

use std::collections::{HashMap, HashSet};

use tracing::{debug, debug_span};

use crate::pair::{Halfwidth, Pair};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("fullwidth must be 1 length string")]
    FullwidthLength,
    #[error("halfwidth must be 1 or 2 length string")]
    HalfwidthLength,
    #[error("pairs must not be empty")]
    Empty,
}

/// Insertion-ordered, value-deduplicated pair accumulator.
#[derive(Debug, Default, Clone)]
pub struct PairTableBuilder {
    pairs: Vec<Pair>,
    seen: HashSet<Pair>,
}

impl PairTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a pair. Re-adding an identical pair is a no-op.
    pub fn add(&mut self, fullwidth: &str, halfwidth: &str) -> Result<&mut Self, TableError> {
        let pair = Pair::new(fullwidth, halfwidth)?;
        Ok(self.add_pair(pair))
    }

    pub fn add_pair(&mut self, pair: Pair) -> &mut Self {
        if self.seen.insert(pair) {
            self.pairs.push(pair);
        }
        self
    }

    /// Number of distinct pairs registered so far.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn build(&self) -> Result<PairTable, TableError> {
        PairTable::freeze(self.pairs.clone())
    }
}

/// Frozen pair table. Immutable once built.
#[derive(Debug, Clone)]
pub struct PairTable {
    pairs: Vec<Pair>,
    full_to_half: HashMap<char, Halfwidth>,
    half1_to_full: HashMap<char, char>,
    half2_to_full: HashMap<(char, char), char>,
}

impl PairTable {
    /// Build a table from string pairs in registration order.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut builder = PairTableBuilder::new();
        for (full, half) in pairs {
            builder.add(full, half)?;
        }
        builder.build()
    }

    fn freeze(pairs: Vec<Pair>) -> Result<Self, TableError> {
        if pairs.is_empty() {
            return Err(TableError::Empty);
        }
        let _span = debug_span!("freeze_pair_table", pair_count = pairs.len()).entered();

        let mut full_to_half = HashMap::with_capacity(pairs.len());
        let mut half1_to_full = HashMap::new();
        let mut half2_to_full = HashMap::new();
        // entry().or_insert keeps the first registration for each key
        for pair in &pairs {
            full_to_half.entry(pair.fullwidth).or_insert(pair.halfwidth);
            match pair.halfwidth {
                Halfwidth::One(a) => {
                    half1_to_full.entry(a).or_insert(pair.fullwidth);
                }
                Halfwidth::Two(a, b) => {
                    half2_to_full.entry((a, b)).or_insert(pair.fullwidth);
                }
            }
        }

        debug!(
            full_keys = full_to_half.len(),
            half1_keys = half1_to_full.len(),
            half2_keys = half2_to_full.len()
        );

        Ok(PairTable {
            pairs,
            full_to_half,
            half1_to_full,
            half2_to_full,
        })
    }

    /// Registered pairs in registration order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always false: a frozen table holds at least one pair.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Halfwidth form registered first for `fullwidth`.
    pub fn halfwidth_of(&self, fullwidth: char) -> Option<Halfwidth> {
        self.full_to_half.get(&fullwidth).copied()
    }

    /// Fullwidth scalar registered first for a single halfwidth scalar.
    pub fn fullwidth_of_one(&self, half: char) -> Option<char> {
        self.half1_to_full.get(&half).copied()
    }

    /// Fullwidth scalar registered first for a two-scalar halfwidth sequence.
    pub fn fullwidth_of_two(&self, base: char, mark: char) -> Option<char> {
        self.half2_to_full.get(&(base, mark)).copied()
    }

    /// Fullwidth scalar for a 1-or-2 scalar halfwidth string, if registered.
    pub fn fullwidth_of(&self, half: &str) -> Option<char> {
        match Halfwidth::parse(half).ok()? {
            Halfwidth::One(a) => self.fullwidth_of_one(a),
            Halfwidth::Two(a, b) => self.fullwidth_of_two(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_bad_fullwidth() {
        let mut b = PairTableBuilder::new();
        assert!(matches!(b.add("", "a"), Err(TableError::FullwidthLength)));
        assert!(matches!(b.add("aa", "a"), Err(TableError::FullwidthLength)));
        assert!(b.is_empty());
    }

    #[test]
    fn add_rejects_bad_halfwidth() {
        let mut b = PairTableBuilder::new();
        assert!(matches!(b.add("a", ""), Err(TableError::HalfwidthLength)));
        assert!(matches!(b.add("a", "aaa"), Err(TableError::HalfwidthLength)));
        assert!(b.is_empty());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            TableError::FullwidthLength.to_string(),
            "fullwidth must be 1 length string"
        );
        assert_eq!(
            TableError::HalfwidthLength.to_string(),
            "halfwidth must be 1 or 2 length string"
        );
        assert_eq!(TableError::Empty.to_string(), "pairs must not be empty");
    }

    #[test]
    fn duplicate_pair_is_noop() {
        let mut b = PairTableBuilder::new();
        b.add("ａ", "a").unwrap().add("ａ", "a").unwrap();
        assert_eq!(b.len(), 1);
        assert_eq!(b.build().unwrap().pairs().len(), 1);
    }

    #[test]
    fn same_key_different_value_is_kept() {
        let mut b = PairTableBuilder::new();
        b.add("‐", "-").unwrap().add("‐", "—").unwrap();
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn build_empty_fails() {
        let err = PairTableBuilder::new().build().unwrap_err();
        assert!(matches!(err, TableError::Empty));
    }

    #[test]
    fn first_registration_wins_full_to_half() {
        let table = PairTable::from_pairs([("‐", "-"), ("‐", "—"), ("‐", "ｰ")]).unwrap();
        assert_eq!(table.halfwidth_of('‐'), Some(Halfwidth::One('-')));
        assert_eq!(table.fullwidth_of("—"), Some('‐'));
        assert_eq!(table.fullwidth_of("ｰ"), Some('‐'));
    }

    #[test]
    fn first_registration_wins_half_to_full() {
        let table = PairTable::from_pairs([("‐", "-"), ("ー", "-"), ("－", "-")]).unwrap();
        assert_eq!(table.fullwidth_of_one('-'), Some('‐'));
        assert_eq!(table.halfwidth_of('ー'), Some(Halfwidth::One('-')));
        assert_eq!(table.halfwidth_of('－'), Some(Halfwidth::One('-')));
    }

    #[test]
    fn two_scalar_keys_are_separate_index() {
        let table = PairTable::from_pairs([("カ", "ｶ"), ("ガ", "ｶﾞ")]).unwrap();
        assert_eq!(table.fullwidth_of_one('ｶ'), Some('カ'));
        assert_eq!(table.fullwidth_of_two('ｶ', 'ﾞ'), Some('ガ'));
        assert_eq!(table.fullwidth_of_one('ﾞ'), None);
        assert_eq!(table.fullwidth_of("too long"), None);
    }

    #[test]
    fn pairs_keep_registration_order() {
        let table = PairTable::from_pairs([("Ｂ", "B"), ("Ａ", "A"), ("Ｂ", "B")]).unwrap();
        let fulls: String = table.pairs().iter().map(|p| p.fullwidth).collect();
        assert_eq!(fulls, "ＢＡ");
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }
}
