//! Single-pass scanner
//!
//! Walks the automaton from the root for each token, remembering the last
//! accepting position. When the walk dead-ends, the token ends at that
//! position and scanning resumes right after it, so characters consumed
//! past it (a trailing hyphen, a colon after a non-scheme) are rescanned.

use crate::automaton::Automaton;
use crate::token::{Span, Token, TokenKind, Utf16Token};

/// Scan `text` into tokens
///
/// Total over all input: every code point ends up in exactly one token.
pub fn run<'a>(automaton: &Automaton, text: &'a str) -> Vec<Token<'a>> {
    // Byte offset of every code point, plus the end of the text
    let mut offsets: Vec<usize> = Vec::with_capacity(text.len() + 1);
    let mut chars: Vec<char> = Vec::with_capacity(text.len());
    for (offset, ch) in text.char_indices() {
        offsets.push(offset);
        chars.push(ch);
    }
    offsets.push(text.len());

    scan_spans(automaton, &chars)
        .into_iter()
        .map(|span| Token {
            kind: span.kind,
            value: &text[offsets[span.start]..offsets[span.end]],
            start: span.start,
            end: span.end,
        })
        .collect()
}

/// Scan UTF-16 code units into tokens
///
/// Surrogate pairs are recombined before classification. An unpaired
/// surrogate counts as one code point and becomes its own SYM token.
pub fn run_utf16<'a>(automaton: &Automaton, units: &'a [u16]) -> Vec<Utf16Token<'a>> {
    let mut offsets: Vec<usize> = Vec::with_capacity(units.len() + 1);
    let mut code_points: Vec<u32> = Vec::with_capacity(units.len());
    let mut position = 0;

    for decoded in char::decode_utf16(units.iter().copied()) {
        offsets.push(position);
        match decoded {
            Ok(ch) => {
                code_points.push(ch as u32);
                position += ch.len_utf16();
            }
            Err(err) => {
                code_points.push(u32::from(err.unpaired_surrogate()));
                position += 1;
            }
        }
    }
    offsets.push(units.len());

    scan_spans(automaton, &code_points)
        .into_iter()
        .map(|span| Utf16Token {
            kind: span.kind,
            value: &units[offsets[span.start]..offsets[span.end]],
            start: span.start,
            end: span.end,
        })
        .collect()
}

/// Core run loop over a sequence of code points
pub fn scan_spans<T>(automaton: &Automaton, input: &[T]) -> Vec<Span>
where
    T: Copy + Into<u32>,
{
    let mut spans = Vec::new();
    let mut cursor = 0;

    while cursor < input.len() {
        let mut state = automaton.root();
        let mut accepted: Option<(TokenKind, usize)> = None;
        let mut position = cursor;

        while position < input.len() {
            let Some(next) = automaton.step(state, input[position].into()) else {
                break;
            };
            state = next;
            position += 1;
            if let Some(kind) = automaton.accepts(state) {
                accepted = Some((kind, position));
            }
            if !automaton.is_open(state) {
                break;
            }
        }

        // Nothing accepted: the character stands alone
        let (kind, end) = accepted.unwrap_or((TokenKind::Sym, cursor + 1));
        spans.push(Span {
            kind,
            start: cursor,
            end,
        });
        cursor = end;
    }

    spans
}
