//! Immutable scanning automaton
//!
//! The automaton is an arena of states addressed by [`StateId`]. Dictionary
//! words form a trie whose nodes fall back to the generic word states for
//! any continuation the trie does not cover.

mod builder;
mod state;

pub use builder::{AutomatonBuilder, LITERAL_LOCALHOST, LITERAL_MAILTO};
pub use state::StateId;

pub(crate) use state::State;

use crate::classifier::{classify_code_point, fold};
use crate::token::TokenKind;

/// Built transition graph shared by every scan
///
/// Never mutated after [`AutomatonBuilder::build`]; safe to share across
/// threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<State>,
    custom_protocols: Vec<String>,
}

impl Automaton {
    pub(crate) fn from_parts(states: Vec<State>, custom_protocols: Vec<String>) -> Self {
        Self {
            states,
            custom_protocols,
        }
    }

    /// Start state of every token
    #[inline]
    pub fn root(&self) -> StateId {
        StateId::ROOT
    }

    /// Follow the edge for `code_point`, preferring exact edges over class edges
    #[inline]
    pub fn step(&self, from: StateId, code_point: u32) -> Option<StateId> {
        let state = &self.states[from.index()];
        if let Some(ch) = char::from_u32(code_point) {
            if let Some(next) = state.exact(fold(ch)) {
                return Some(next);
            }
        }
        state.class_edge(classify_code_point(code_point))
    }

    /// Token kind accepted when scanning halts in `state`
    #[inline]
    pub fn accepts(&self, state: StateId) -> Option<TokenKind> {
        self.states[state.index()].accepts
    }

    /// Whether `state` has any outgoing edge
    #[inline]
    pub fn is_open(&self, state: StateId) -> bool {
        !self.states[state.index()].is_terminal()
    }

    /// Number of states in the arena
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Normalized custom protocols this automaton recognizes
    pub fn custom_protocols(&self) -> &[String] {
        &self.custom_protocols
    }

    /// Walk `word` from the root and report the kind it would be emitted as
    /// if it were the whole input. Returns `None` when the walk dead-ends.
    pub fn classify_word(&self, word: &str) -> Option<TokenKind> {
        let mut state = self.root();
        for ch in word.chars() {
            state = self.step(state, ch as u32)?;
        }
        self.accepts(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn automaton() -> Automaton {
        AutomatonBuilder::new()
            .tlds(["com", "co"])
            .schemes(["http", "https"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_root_is_open() {
        let automaton = automaton();
        assert!(automaton.is_open(automaton.root()));
        assert_eq!(automaton.accepts(automaton.root()), None);
    }

    #[test]
    fn test_punctuation_states_are_terminal() {
        let automaton = automaton();
        let at = automaton.step(automaton.root(), '@' as u32).unwrap();
        assert_eq!(automaton.accepts(at), Some(TokenKind::At));
        assert!(!automaton.is_open(at));
    }

    #[test]
    fn test_classify_word() {
        let automaton = automaton();
        assert_eq!(automaton.classify_word("com"), Some(TokenKind::Tld));
        assert_eq!(automaton.classify_word("CO"), Some(TokenKind::Tld));
        assert_eq!(automaton.classify_word("comm"), Some(TokenKind::Domain));
        assert_eq!(automaton.classify_word("http"), Some(TokenKind::Domain));
        assert_eq!(automaton.classify_word("https:"), Some(TokenKind::Protocol));
        assert_eq!(automaton.classify_word("mailto:"), Some(TokenKind::Mailto));
        assert_eq!(automaton.classify_word("localhost"), Some(TokenKind::Localhost));
        assert_eq!(automaton.classify_word("0123"), Some(TokenKind::Num));
        // Hyphen state is not accepting
        assert_eq!(automaton.classify_word("a-"), None);
        // Dead end: colon after a plain word
        assert_eq!(automaton.classify_word("files:"), None);
    }

    #[test]
    fn test_automaton_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Automaton>();
    }
}
