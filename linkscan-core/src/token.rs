//! Token and offset model
//!
//! Offsets are code-point indices into the scanned text, `end` exclusive.

use std::fmt;

/// Lexical kind of a token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum TokenKind {
    /// Run of whitespace
    Ws,
    /// A single `\n`
    Nl,
    /// Run of ASCII digits
    Num,
    /// Generic word run (letters, digits, interior hyphens)
    Domain,
    /// Word that exactly matches a top-level domain
    Tld,
    /// Scheme followed by its colon, e.g. `https:`
    Protocol,
    /// `mailto:`
    Mailto,
    /// `localhost`
    Localhost,
    /// Mark, symbol or any character with no dedicated kind
    Sym,

    /// `@`
    At,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `+`
    Plus,
    /// `#`
    Pound,
    /// `/`
    Slash,
    /// `&`
    Ampersand,
    /// `*`
    Asterisk,
    /// `\`
    Backslash,
    /// `%`
    Percent,
    /// `` ` ``
    Backtick,
    /// `^`
    Caret,
    /// `|`
    Pipe,
    /// `~`
    Tilde,
    /// `$`
    Dollar,
    /// `=`
    Equals,
    /// `?`
    Query,
    /// `<`
    OpenAngleBracket,
    /// `>`
    CloseAngleBracket,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `!`
    Exclamation,
    /// `,`
    Comma,
    /// `;`
    Semi,
    /// `'`
    Apostrophe,
    /// `_`
    Underscore,
    /// `-`
    Hyphen,
}

/// Punctuation characters that always form a token of their own
pub const PUNCTUATION: [(char, TokenKind); 29] = [
    ('@', TokenKind::At),
    (':', TokenKind::Colon),
    ('.', TokenKind::Dot),
    ('+', TokenKind::Plus),
    ('#', TokenKind::Pound),
    ('/', TokenKind::Slash),
    ('&', TokenKind::Ampersand),
    ('*', TokenKind::Asterisk),
    ('\\', TokenKind::Backslash),
    ('%', TokenKind::Percent),
    ('`', TokenKind::Backtick),
    ('^', TokenKind::Caret),
    ('|', TokenKind::Pipe),
    ('~', TokenKind::Tilde),
    ('$', TokenKind::Dollar),
    ('=', TokenKind::Equals),
    ('?', TokenKind::Query),
    ('<', TokenKind::OpenAngleBracket),
    ('>', TokenKind::CloseAngleBracket),
    ('(', TokenKind::OpenParen),
    (')', TokenKind::CloseParen),
    ('[', TokenKind::OpenBracket),
    (']', TokenKind::CloseBracket),
    ('{', TokenKind::OpenBrace),
    ('}', TokenKind::CloseBrace),
    ('!', TokenKind::Exclamation),
    (',', TokenKind::Comma),
    (';', TokenKind::Semi),
    ('\'', TokenKind::Apostrophe),
];

impl TokenKind {
    /// Stable upper-case name used in serialized output
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Ws => "WS",
            TokenKind::Nl => "NL",
            TokenKind::Num => "NUM",
            TokenKind::Domain => "DOMAIN",
            TokenKind::Tld => "TLD",
            TokenKind::Protocol => "PROTOCOL",
            TokenKind::Mailto => "MAILTO",
            TokenKind::Localhost => "LOCALHOST",
            TokenKind::Sym => "SYM",
            TokenKind::At => "AT",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::Plus => "PLUS",
            TokenKind::Pound => "POUND",
            TokenKind::Slash => "SLASH",
            TokenKind::Ampersand => "AMPERSAND",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Backslash => "BACKSLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Backtick => "BACKTICK",
            TokenKind::Caret => "CARET",
            TokenKind::Pipe => "PIPE",
            TokenKind::Tilde => "TILDE",
            TokenKind::Dollar => "DOLLAR",
            TokenKind::Equals => "EQUALS",
            TokenKind::Query => "QUERY",
            TokenKind::OpenAngleBracket => "OPENANGLEBRACKET",
            TokenKind::CloseAngleBracket => "CLOSEANGLEBRACKET",
            TokenKind::OpenParen => "OPENPAREN",
            TokenKind::CloseParen => "CLOSEPAREN",
            TokenKind::OpenBracket => "OPENBRACKET",
            TokenKind::CloseBracket => "CLOSEBRACKET",
            TokenKind::OpenBrace => "OPENBRACE",
            TokenKind::CloseBrace => "CLOSEBRACE",
            TokenKind::Exclamation => "EXCLAMATION",
            TokenKind::Comma => "COMMA",
            TokenKind::Semi => "SEMI",
            TokenKind::Apostrophe => "APOSTROPHE",
            TokenKind::Underscore => "UNDERSCORE",
            TokenKind::Hyphen => "HYPHEN",
        }
    }

    /// Kind of a single fixed punctuation character, if it has one
    pub fn for_punctuation(ch: char) -> Option<TokenKind> {
        match ch {
            '_' => Some(TokenKind::Underscore),
            '-' => Some(TokenKind::Hyphen),
            _ => PUNCTUATION
                .iter()
                .find(|(punct, _)| *punct == ch)
                .map(|(_, kind)| *kind),
        }
    }

    /// Kinds produced by word runs
    pub fn is_word(self) -> bool {
        matches!(
            self,
            TokenKind::Num
                | TokenKind::Domain
                | TokenKind::Tld
                | TokenKind::Protocol
                | TokenKind::Mailto
                | TokenKind::Localhost
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind and code-point range of a token, without its text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Token kind
    pub kind: TokenKind,
    /// Start code-point offset (inclusive)
    pub start: usize,
    /// End code-point offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Number of code points covered
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers nothing (never produced by the scanner)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token over UTF-8 text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    /// Token kind
    pub kind: TokenKind,
    /// Exact substring of the input
    pub value: &'a str,
    /// Start code-point offset (inclusive)
    pub start: usize,
    /// End code-point offset (exclusive)
    pub end: usize,
}

impl<'a> Token<'a> {
    /// The token's kind and range
    pub fn span(&self) -> Span {
        Span {
            kind: self.kind,
            start: self.start,
            end: self.end,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{}..{}", self.kind, self.value, self.start, self.end)
    }
}

/// Token over UTF-16 code units
///
/// Offsets still count code points; `value` is the exact slice of code
/// units, unpaired surrogates included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Utf16Token<'a> {
    /// Token kind
    pub kind: TokenKind,
    /// Exact slice of the input code units
    pub value: &'a [u16],
    /// Start code-point offset (inclusive)
    pub start: usize,
    /// End code-point offset (exclusive)
    pub end: usize,
}

impl Utf16Token<'_> {
    /// Lossy UTF-8 rendering of the value
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_lookup() {
        assert_eq!(TokenKind::for_punctuation('@'), Some(TokenKind::At));
        assert_eq!(TokenKind::for_punctuation('\''), Some(TokenKind::Apostrophe));
        assert_eq!(TokenKind::for_punctuation('_'), Some(TokenKind::Underscore));
        assert_eq!(TokenKind::for_punctuation('-'), Some(TokenKind::Hyphen));
        assert_eq!(TokenKind::for_punctuation('"'), None);
        assert_eq!(TokenKind::for_punctuation('a'), None);
    }

    #[test]
    fn test_punctuation_table_is_unique() {
        for (i, (a, _)) in PUNCTUATION.iter().enumerate() {
            for (b, _) in &PUNCTUATION[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(TokenKind::OpenAngleBracket.name(), "OPENANGLEBRACKET");
        assert_eq!(TokenKind::Localhost.to_string(), "LOCALHOST");
    }

    #[test]
    fn test_token_display() {
        let token = Token {
            kind: TokenKind::Domain,
            value: "hello",
            start: 0,
            end: 5,
        };
        assert_eq!(token.to_string(), "DOMAIN(\"hello\")@0..5");
        assert_eq!(token.span().len(), 5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_names_match() {
        for kind in [TokenKind::OpenAngleBracket, TokenKind::Tld, TokenKind::Ws, TokenKind::Mailto] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            let back: TokenKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }

        let token = Token {
            kind: TokenKind::Num,
            value: "42",
            start: 3,
            end: 5,
        };
        assert_eq!(
            serde_json::to_string(&token).unwrap(),
            r#"{"kind":"NUM","value":"42","start":3,"end":5}"#
        );
    }
}
