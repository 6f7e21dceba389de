//! Scanning automaton for link detection
//!
//! This crate turns raw text into an ordered sequence of classified lexical
//! tokens (words, numbers, top-level domains, scheme prefixes, punctuation,
//! whitespace). A later stage assembles those tokens into URLs and email
//! addresses; this crate only classifies lexical shape.
//!
//! # Architecture
//!
//! - **Classifier**: maps each code point to a [`CharacterClass`]
//! - **Automaton**: an immutable arena of states with a case-insensitive
//!   dictionary trie overlaid on the generic word paths
//! - **Scanner**: a single maximal-munch pass that backtracks to the last
//!   accepting position
//!
//! # Example
//!
//! ```rust
//! use linkscan_core::{run, AutomatonBuilder, TokenKind};
//!
//! let automaton = AutomatonBuilder::new()
//!     .tlds(["com"])
//!     .schemes(["https"])
//!     .build()
//!     .unwrap();
//!
//! let tokens = run(&automaton, "https://example.com");
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Protocol,
//!         TokenKind::Slash,
//!         TokenKind::Slash,
//!         TokenKind::Domain,
//!         TokenKind::Dot,
//!         TokenKind::Tld,
//!     ]
//! );
//! assert_eq!(tokens[0].value, "https:");
//! ```

#![warn(missing_docs)]

pub mod automaton;
pub mod classifier;
pub mod error;
pub mod scanner;
pub mod token;

pub use automaton::{Automaton, AutomatonBuilder, StateId, LITERAL_LOCALHOST, LITERAL_MAILTO};
pub use classifier::{classify, classify_code_point, fold, CharacterClass};
pub use error::{CoreError, Result};
pub use scanner::{run, run_utf16, scan_spans};
pub use token::{Span, Token, TokenKind, Utf16Token, PUNCTUATION};
