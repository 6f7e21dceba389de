//! Character classification for the scanning automaton
//!
//! Every code point maps to exactly one [`CharacterClass`]. The mapping is
//! pure and total; it is the only place Unicode properties are consulted.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Classification of a single code point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// ASCII punctuation other than `-` and `_`, carrying the character
    AsciiPunct(char),
    /// `-`, only part of a word when followed by a word character
    Hyphen,
    /// `_`, always a token of its own
    Underscore,
    /// ASCII `0-9`
    Digit,
    /// ASCII `a-z` / `A-Z`
    AsciiAlpha,
    /// Any other Unicode letter (general category L*)
    UnicodeAlpha,
    /// Space separators and space-like control characters
    Whitespace,
    /// `\n`
    Newline,
    /// Combining marks (general category M*)
    Mark,
    /// Everything else, including emoji and unpaired surrogates
    Other,
}

/// Number of distinct class slots an automaton state can have edges for
pub(crate) const CLASS_SLOTS: usize = 10;

impl CharacterClass {
    /// Letters of any script
    #[inline]
    pub fn is_alpha(self) -> bool {
        matches!(self, CharacterClass::AsciiAlpha | CharacterClass::UnicodeAlpha)
    }

    /// Characters that may extend a word run
    #[inline]
    pub fn is_word(self) -> bool {
        matches!(
            self,
            CharacterClass::Digit | CharacterClass::AsciiAlpha | CharacterClass::UnicodeAlpha
        )
    }

    /// Classes that never merge with a neighbour and never extend a word
    #[inline]
    pub fn is_singleton(self) -> bool {
        matches!(self, CharacterClass::Mark | CharacterClass::Other)
    }

    /// Index into a state's class edge table
    #[inline]
    pub(crate) fn slot(self) -> usize {
        match self {
            CharacterClass::AsciiPunct(_) => 0,
            CharacterClass::Hyphen => 1,
            CharacterClass::Underscore => 2,
            CharacterClass::Digit => 3,
            CharacterClass::AsciiAlpha => 4,
            CharacterClass::UnicodeAlpha => 5,
            CharacterClass::Whitespace => 6,
            CharacterClass::Newline => 7,
            CharacterClass::Mark => 8,
            CharacterClass::Other => 9,
        }
    }
}

/// Classify a Unicode scalar value
pub fn classify(ch: char) -> CharacterClass {
    if ch.is_ascii() {
        return classify_ascii(ch);
    }

    match get_general_category(ch) {
        GeneralCategory::UppercaseLetter
        | GeneralCategory::LowercaseLetter
        | GeneralCategory::TitlecaseLetter
        | GeneralCategory::ModifierLetter
        | GeneralCategory::OtherLetter => CharacterClass::UnicodeAlpha,
        GeneralCategory::NonspacingMark
        | GeneralCategory::SpacingMark
        | GeneralCategory::EnclosingMark => CharacterClass::Mark,
        GeneralCategory::SpaceSeparator
        | GeneralCategory::LineSeparator
        | GeneralCategory::ParagraphSeparator => CharacterClass::Whitespace,
        // NEL and the byte order mark behave as spaces
        _ if matches!(ch, '\u{0085}' | '\u{FEFF}') => CharacterClass::Whitespace,
        _ => CharacterClass::Other,
    }
}

/// Classify a raw code point, which may be an unpaired surrogate
pub fn classify_code_point(code_point: u32) -> CharacterClass {
    match char::from_u32(code_point) {
        Some(ch) => classify(ch),
        None => CharacterClass::Other,
    }
}

#[inline]
fn classify_ascii(ch: char) -> CharacterClass {
    match ch {
        '0'..='9' => CharacterClass::Digit,
        'a'..='z' | 'A'..='Z' => CharacterClass::AsciiAlpha,
        '\n' => CharacterClass::Newline,
        ' ' | '\t' | '\u{000B}' | '\u{000C}' | '\r' => CharacterClass::Whitespace,
        '-' => CharacterClass::Hyphen,
        '_' => CharacterClass::Underscore,
        c if c.is_ascii_punctuation() => CharacterClass::AsciiPunct(c),
        _ => CharacterClass::Other,
    }
}

/// Case fold used for dictionary comparison.
///
/// Characters whose lowercase form expands to several characters are left
/// untouched so that one input code point always maps to one trie edge.
#[inline]
pub fn fold(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }

    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_classes() {
        assert_eq!(classify('a'), CharacterClass::AsciiAlpha);
        assert_eq!(classify('Z'), CharacterClass::AsciiAlpha);
        assert_eq!(classify('7'), CharacterClass::Digit);
        assert_eq!(classify('-'), CharacterClass::Hyphen);
        assert_eq!(classify('_'), CharacterClass::Underscore);
        assert_eq!(classify('\''), CharacterClass::AsciiPunct('\''));
        assert_eq!(classify('"'), CharacterClass::AsciiPunct('"'));
        assert_eq!(classify('@'), CharacterClass::AsciiPunct('@'));
        assert_eq!(classify('\u{0007}'), CharacterClass::Other);
    }

    #[test]
    fn test_newline_is_not_whitespace() {
        assert_eq!(classify('\n'), CharacterClass::Newline);
        assert_eq!(classify('\r'), CharacterClass::Whitespace);
        assert_eq!(classify('\t'), CharacterClass::Whitespace);
    }

    #[test]
    fn test_unicode_spaces() {
        for ch in ['\u{00A0}', '\u{3000}', '\u{2003}', '\u{2028}', '\u{FEFF}', '\u{0085}'] {
            assert_eq!(classify(ch), CharacterClass::Whitespace, "{ch:?}");
        }
    }

    #[test]
    fn test_unicode_letters() {
        for ch in ['ç', 'İ', 'б', '한', 'س', 'テ', 'ー', 'ό'] {
            assert_eq!(classify(ch), CharacterClass::UnicodeAlpha, "{ch:?}");
        }
        // Astral-plane letter (Gothic)
        assert_eq!(classify('\u{10330}'), CharacterClass::UnicodeAlpha);
    }

    #[test]
    fn test_marks() {
        for ch in ['\u{0301}', '\u{0321}', '\u{034A}', '\u{035D}', '\u{0360}', '\u{093E}'] {
            assert_eq!(classify(ch), CharacterClass::Mark, "{ch:?}");
        }
    }

    #[test]
    fn test_other() {
        assert_eq!(classify('🍕'), CharacterClass::Other);
        assert_eq!(classify('€'), CharacterClass::Other);
        // Non-ASCII digits are not DIGIT
        assert_eq!(classify('٣'), CharacterClass::Other);
    }

    #[test]
    fn test_surrogates_are_other() {
        assert_eq!(classify_code_point(0xD83D), CharacterClass::Other);
        assert_eq!(classify_code_point(0xDC00), CharacterClass::Other);
        assert_eq!(classify_code_point(0x110000), CharacterClass::Other);
        assert_eq!(classify_code_point('a' as u32), CharacterClass::AsciiAlpha);
    }

    #[test]
    fn test_word_predicates() {
        assert!(CharacterClass::Digit.is_word());
        assert!(CharacterClass::UnicodeAlpha.is_word());
        assert!(!CharacterClass::Hyphen.is_word());
        assert!(!CharacterClass::Underscore.is_word());
        assert!(CharacterClass::AsciiAlpha.is_alpha());
        assert!(!CharacterClass::Digit.is_alpha());
        assert!(CharacterClass::Mark.is_singleton());
        assert!(CharacterClass::Other.is_singleton());
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold('A'), 'a');
        assert_eq!(fold('a'), 'a');
        assert_eq!(fold('Ε'), 'ε');
        assert_eq!(fold('Б'), 'б');
        // Lowercases to two code points, kept as-is
        assert_eq!(fold('İ'), 'İ');
        assert_eq!(fold('-'), '-');
    }

    #[test]
    fn test_slots_are_distinct() {
        let classes = [
            CharacterClass::AsciiPunct('.'),
            CharacterClass::Hyphen,
            CharacterClass::Underscore,
            CharacterClass::Digit,
            CharacterClass::AsciiAlpha,
            CharacterClass::UnicodeAlpha,
            CharacterClass::Whitespace,
            CharacterClass::Newline,
            CharacterClass::Mark,
            CharacterClass::Other,
        ];
        let mut seen = [false; CLASS_SLOTS];
        for class in classes {
            assert!(!seen[class.slot()]);
            seen[class.slot()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
