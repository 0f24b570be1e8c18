use std::fmt::{self, Write};

use crate::table::TableError;

/// Halfwidth side of a pair: one scalar, or a base scalar followed by a mark
/// (e.g. "ｶﾞ").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Halfwidth {
    One(char),
    Two(char, char),
}

impl Halfwidth {
    /// Parse a 1-or-2 scalar string.
    pub fn parse(s: &str) -> Result<Self, TableError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), None, _) => Ok(Halfwidth::One(a)),
            (Some(a), Some(b), None) => Ok(Halfwidth::Two(a, b)),
            _ => Err(TableError::HalfwidthLength),
        }
    }

    /// Number of scalars (1 or 2).
    pub fn scalar_count(&self) -> usize {
        match self {
            Halfwidth::One(_) => 1,
            Halfwidth::Two(..) => 2,
        }
    }

    pub fn push_to(&self, out: &mut String) {
        match *self {
            Halfwidth::One(a) => out.push(a),
            Halfwidth::Two(a, b) => {
                out.push(a);
                out.push(b);
            }
        }
    }
}

impl fmt::Display for Halfwidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Halfwidth::One(a) => f.write_char(a),
            Halfwidth::Two(a, b) => {
                f.write_char(a)?;
                f.write_char(b)
            }
        }
    }
}

/// One declared association between a fullwidth scalar and its halfwidth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    pub fullwidth: char,
    pub halfwidth: Halfwidth,
}

impl Pair {
    /// Validate and build a pair from string forms.
    ///
    /// The fullwidth side must be exactly one scalar and the halfwidth side one
    /// or two scalars. The fullwidth side is checked first.
    pub fn new(fullwidth: &str, halfwidth: &str) -> Result<Self, TableError> {
        let mut chars = fullwidth.chars();
        let full = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(TableError::FullwidthLength),
        };
        Ok(Pair {
            fullwidth: full,
            halfwidth: Halfwidth::parse(halfwidth)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_one_and_two() {
        assert_eq!(Halfwidth::parse("A").unwrap(), Halfwidth::One('A'));
        assert_eq!(Halfwidth::parse("ｶﾞ").unwrap(), Halfwidth::Two('ｶ', 'ﾞ'));
        assert_eq!(Halfwidth::parse("ｶﾞ").unwrap().scalar_count(), 2);
    }

    #[test]
    fn halfwidth_length_errors() {
        assert!(matches!(Halfwidth::parse(""), Err(TableError::HalfwidthLength)));
        assert!(matches!(
            Halfwidth::parse("aaa"),
            Err(TableError::HalfwidthLength)
        ));
    }

    #[test]
    fn counts_scalars_not_bytes() {
        // 4-byte scalar outside the BMP is still one scalar
        let pair = Pair::new("𠮷", "𠮷").unwrap();
        assert_eq!(pair.fullwidth, '𠮷');
        assert_eq!(pair.halfwidth, Halfwidth::One('𠮷'));
    }

    #[test]
    fn fullwidth_checked_first() {
        let err = Pair::new("", "").unwrap_err();
        assert!(matches!(err, TableError::FullwidthLength));
    }

    #[test]
    fn display_halfwidth() {
        assert_eq!(Halfwidth::Two('ﾊ', 'ﾟ').to_string(), "ﾊﾟ");
        assert_eq!(Halfwidth::One('-').to_string(), "-");
    }
}
