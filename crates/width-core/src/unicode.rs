//! Character-level classification of width forms.

/// Halfwidth katakana and punctuation (U+FF61..U+FF9F), including the
/// halfwidth voicing marks ﾞ and ﾟ.
pub fn is_halfwidth_katakana(c: char) -> bool {
    ('\u{FF61}'..='\u{FF9F}').contains(&c)
}

/// Fullwidth ASCII variants (U+FF01..U+FF5E).
pub fn is_fullwidth_ascii(c: char) -> bool {
    ('\u{FF01}'..='\u{FF5E}').contains(&c)
}

/// Printable ASCII excluding space.
pub fn is_halfwidth_ascii(c: char) -> bool {
    ('\u{21}'..='\u{7E}').contains(&c)
}

/// Full Katakana block (U+30A0..U+30FF).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Full Hiragana block (U+3040..U+309F). Includes the standalone voicing
/// marks ゛ and ゜.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// Coarse script/width class of a scalar, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    HalfwidthAscii,
    FullwidthAscii,
    HalfwidthKatakana,
    Katakana,
    Hiragana,
    Kanji,
    Space,
    Other,
}

impl WidthClass {
    pub fn of(c: char) -> Self {
        match c {
            ' ' | '\u{3000}' => WidthClass::Space,
            c if is_halfwidth_ascii(c) => WidthClass::HalfwidthAscii,
            c if is_fullwidth_ascii(c) => WidthClass::FullwidthAscii,
            c if is_halfwidth_katakana(c) => WidthClass::HalfwidthKatakana,
            c if is_katakana(c) => WidthClass::Katakana,
            c if is_hiragana(c) => WidthClass::Hiragana,
            c if is_kanji(c) => WidthClass::Kanji,
            _ => WidthClass::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WidthClass::HalfwidthAscii => "halfwidth ascii",
            WidthClass::FullwidthAscii => "fullwidth ascii",
            WidthClass::HalfwidthKatakana => "halfwidth katakana",
            WidthClass::Katakana => "katakana",
            WidthClass::Hiragana => "hiragana",
            WidthClass::Kanji => "kanji",
            WidthClass::Space => "space",
            WidthClass::Other => "other",
        }
    }
}
