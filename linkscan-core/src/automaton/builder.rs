//! Automaton construction
//!
//! Builds the generic word states first, then overlays the TLD and scheme
//! dictionaries as a case-insensitive trie hanging off the root.

use crate::automaton::{Automaton, State, StateId};
use crate::classifier::{classify, fold, CharacterClass};
use crate::error::{CoreError, Result};
use crate::token::{TokenKind, PUNCTUATION};

/// Scheme literal that yields MAILTO instead of PROTOCOL
pub const LITERAL_MAILTO: &str = "mailto";

/// Host literal that yields LOCALHOST without a colon
pub const LITERAL_LOCALHOST: &str = "localhost";

/// Builder for [`Automaton`]
///
/// ```
/// use linkscan_core::{AutomatonBuilder, TokenKind};
///
/// let automaton = AutomatonBuilder::new()
///     .tlds(["com", "org"])
///     .schemes(["http", "https"])
///     .custom_protocols(["steam"])
///     .build()
///     .unwrap();
///
/// assert_eq!(automaton.classify_word("steam:"), Some(TokenKind::Protocol));
/// assert_eq!(automaton.classify_word("ORG"), Some(TokenKind::Tld));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutomatonBuilder {
    tlds: Vec<String>,
    schemes: Vec<String>,
    custom_protocols: Vec<String>,
}

impl AutomatonBuilder {
    /// Create a builder with empty dictionaries
    pub fn new() -> Self {
        Self::default()
    }

    /// Add top-level domains
    pub fn tlds<I, S>(mut self, tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tlds
            .extend(tlds.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Add built-in schemes (recognized as PROTOCOL when followed by `:`)
    pub fn schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.schemes
            .extend(schemes.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Add caller-supplied protocol names
    pub fn custom_protocols<I, S>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.custom_protocols
            .extend(protocols.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Build the automaton
    ///
    /// Fails without producing anything if a custom protocol or a dictionary
    /// entry is malformed.
    pub fn build(&self) -> Result<Automaton> {
        let custom_protocols = normalize_protocols(&self.custom_protocols)?;
        for tld in &self.tlds {
            validate_entry("tld", tld)?;
        }
        for scheme in &self.schemes {
            validate_entry("scheme", scheme)?;
        }

        let mut graph = Graph::new();

        for tld in &self.tlds {
            let end = graph.insert_word(tld);
            graph.states[end.index()].accepts = Some(TokenKind::Tld);
        }

        // mailto goes first so a custom "mailto" cannot turn it into PROTOCOL
        let mailto = graph.insert_word(LITERAL_MAILTO);
        graph.add_colon(mailto, graph.mailto);

        for scheme in self.schemes.iter().chain(custom_protocols.iter()) {
            let end = graph.insert_word(scheme);
            graph.add_colon(end, graph.protocol);
        }

        let localhost = graph.insert_word(LITERAL_LOCALHOST);
        graph.states[localhost.index()].accepts = Some(TokenKind::Localhost);

        let mut states = graph.states;
        for state in &mut states {
            state.freeze();
        }

        tracing::debug!(
            states = states.len(),
            tlds = self.tlds.len(),
            schemes = self.schemes.len(),
            custom_protocols = custom_protocols.len(),
            "built scanning automaton"
        );

        Ok(Automaton::from_parts(states, custom_protocols))
    }
}

/// Validate custom protocols and deduplicate them case-insensitively,
/// keeping first-seen order. Returned names are lowercase.
pub(crate) fn normalize_protocols(protocols: &[String]) -> Result<Vec<String>> {
    let mut normalized: Vec<String> = Vec::with_capacity(protocols.len());
    for protocol in protocols {
        if protocol.is_empty() || !protocol.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidProtocol {
                name: protocol.clone(),
            });
        }
        let lower = protocol.to_ascii_lowercase();
        if !normalized.contains(&lower) {
            normalized.push(lower);
        }
    }
    Ok(normalized)
}

fn validate_entry(dictionary: &'static str, entry: &str) -> Result<()> {
    if entry.is_empty() || !entry.chars().all(|c| classify(c).is_word()) {
        return Err(CoreError::InvalidDictionaryEntry {
            dictionary,
            entry: entry.to_string(),
        });
    }
    Ok(())
}

/// Mutable arena used only during construction
struct Graph {
    states: Vec<State>,
    num: StateId,
    domain: StateId,
    domain_hyphen: StateId,
    protocol: StateId,
    mailto: StateId,
}

impl Graph {
    fn new() -> Self {
        let mut graph = Graph {
            states: vec![State::default()],
            num: StateId::ROOT,
            domain: StateId::ROOT,
            domain_hyphen: StateId::ROOT,
            protocol: StateId::ROOT,
            mailto: StateId::ROOT,
        };

        graph.num = graph.push(State::accepting(TokenKind::Num));
        graph.domain = graph.push(State::accepting(TokenKind::Domain));
        // Not accepting: a trailing hyphen is rolled back to the word before it
        graph.domain_hyphen = graph.push(State::default());
        graph.protocol = graph.push(State::accepting(TokenKind::Protocol));
        graph.mailto = graph.push(State::accepting(TokenKind::Mailto));

        let (num, domain, domain_hyphen) = (graph.num, graph.domain, graph.domain_hyphen);

        // Generic word paths
        let state = &mut graph.states[num.index()];
        state.set_word_edges(num, domain);
        state.set_class_edge(CharacterClass::Hyphen, domain_hyphen);

        let state = &mut graph.states[domain.index()];
        state.set_word_edges(domain, domain);
        state.set_class_edge(CharacterClass::Hyphen, domain_hyphen);

        graph.states[domain_hyphen.index()].set_word_edges(domain, domain);

        // Whitespace merges, newline never does
        let ws = graph.push(State::accepting(TokenKind::Ws));
        graph.states[ws.index()].set_class_edge(CharacterClass::Whitespace, ws);
        let nl = graph.push(State::accepting(TokenKind::Nl));
        let sym = graph.push(State::accepting(TokenKind::Sym));
        let hyphen = graph.push(State::accepting(TokenKind::Hyphen));
        let underscore = graph.push(State::accepting(TokenKind::Underscore));

        let mut punctuation = Vec::with_capacity(PUNCTUATION.len());
        for (ch, kind) in PUNCTUATION {
            punctuation.push((ch, graph.push(State::accepting(kind))));
        }

        let root = &mut graph.states[StateId::ROOT.index()];
        root.set_word_edges(num, domain);
        root.set_class_edge(CharacterClass::Whitespace, ws);
        root.set_class_edge(CharacterClass::Newline, nl);
        root.set_class_edge(CharacterClass::Hyphen, hyphen);
        root.set_class_edge(CharacterClass::Underscore, underscore);
        // Unlisted ASCII punctuation, marks and everything else
        root.set_class_edge(CharacterClass::AsciiPunct('\0'), sym);
        root.set_class_edge(CharacterClass::Mark, sym);
        root.set_class_edge(CharacterClass::Other, sym);
        for (ch, target) in punctuation {
            root.add_exact(ch, target);
        }

        graph
    }

    fn push(&mut self, state: State) -> StateId {
        let id = StateId::new(self.states.len());
        self.states.push(state);
        id
    }

    /// Spell `word` from the root, creating trie nodes as needed, and
    /// return the node at its end.
    ///
    /// New nodes mirror the generic path they shadow: NUM while every
    /// character so far is a digit, DOMAIN otherwise.
    fn insert_word(&mut self, word: &str) -> StateId {
        let mut current = StateId::ROOT;
        let mut numeric = true;

        for ch in word.chars() {
            numeric &= classify(ch) == CharacterClass::Digit;
            let key = fold(ch);

            current = match self.states[current.index()].exact_unsorted(key) {
                Some(next) => next,
                None => {
                    let mut node = if numeric {
                        State::accepting(TokenKind::Num)
                    } else {
                        State::accepting(TokenKind::Domain)
                    };
                    let digit_target = if numeric { self.num } else { self.domain };
                    node.set_word_edges(digit_target, self.domain);
                    node.set_class_edge(CharacterClass::Hyphen, self.domain_hyphen);

                    let next = self.push(node);
                    self.states[current.index()].add_exact(key, next);
                    next
                }
            };
        }

        current
    }

    fn add_colon(&mut self, node: StateId, target: StateId) {
        self.states[node.index()].add_exact(':', target);
    }
}
