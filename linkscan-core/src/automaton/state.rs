//! Arena state representation

use smallvec::SmallVec;

use crate::classifier::{CharacterClass, CLASS_SLOTS};
use crate::token::TokenKind;

/// Index of a state in the automaton arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(u32);

impl StateId {
    pub(crate) const ROOT: StateId = StateId(0);

    pub(crate) fn new(index: usize) -> Self {
        StateId(index as u32)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One automaton node
///
/// Exact edges are keyed by the case-folded character and kept sorted once
/// the automaton is frozen, so lookups are a binary search.
#[derive(Debug, Clone, Default)]
pub(crate) struct State {
    exact: SmallVec<[(char, StateId); 4]>,
    classes: [Option<StateId>; CLASS_SLOTS],
    pub(crate) accepts: Option<TokenKind>,
}

impl State {
    pub(crate) fn accepting(kind: TokenKind) -> Self {
        Self {
            accepts: Some(kind),
            ..Self::default()
        }
    }

    #[inline]
    pub(crate) fn exact(&self, ch: char) -> Option<StateId> {
        self.exact
            .binary_search_by_key(&ch, |(key, _)| *key)
            .ok()
            .map(|i| self.exact[i].1)
    }

    /// Exact edge lookup that works before the edge list is sorted
    pub(crate) fn exact_unsorted(&self, ch: char) -> Option<StateId> {
        self.exact
            .iter()
            .find(|(key, _)| *key == ch)
            .map(|(_, target)| *target)
    }

    /// Add an exact edge; an existing edge for `ch` is kept
    pub(crate) fn add_exact(&mut self, ch: char, target: StateId) {
        if self.exact_unsorted(ch).is_none() {
            self.exact.push((ch, target));
        }
    }

    #[inline]
    pub(crate) fn class_edge(&self, class: CharacterClass) -> Option<StateId> {
        self.classes[class.slot()]
    }

    pub(crate) fn set_class_edge(&mut self, class: CharacterClass, target: StateId) {
        self.classes[class.slot()] = Some(target);
    }

    /// Route digits to `digit` and letters of any script to `alpha`
    pub(crate) fn set_word_edges(&mut self, digit: StateId, alpha: StateId) {
        self.set_class_edge(CharacterClass::Digit, digit);
        self.set_class_edge(CharacterClass::AsciiAlpha, alpha);
        self.set_class_edge(CharacterClass::UnicodeAlpha, alpha);
    }

    pub(crate) fn is_terminal(&self) -> bool {
        self.exact.is_empty() && self.classes.iter().all(Option::is_none)
    }

    pub(crate) fn freeze(&mut self) {
        self.exact.sort_unstable_by_key(|(key, _)| *key);
        self.exact.shrink_to_fit();
    }
}
