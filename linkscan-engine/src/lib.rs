//! Dictionary assets, automaton caching and batch scanning
//!
//! This crate wires the versioned TLD/scheme dictionaries into
//! [`linkscan_core`] automatons, caches one automaton per custom-protocol
//! set, and exposes a [`Scanner`] facade with sequential and parallel batch
//! execution.
//!
//! ```
//! use linkscan_engine::{init, run, TokenKind};
//!
//! let automaton = init(&["steam"]).unwrap();
//! let tokens = run(&automaton, "steam://run/42");
//! assert_eq!(tokens[0].kind, TokenKind::Protocol);
//! assert_eq!(tokens[0].value, "steam:");
//! ```

#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod executor;
pub mod output;
pub mod processor;

use std::sync::Arc;

// Re-export key types
pub use cache::AutomatonCache;
pub use config::ScannerConfig;
pub use dictionaries::Dictionaries;
pub use error::{EngineError, Result};
pub use executor::{auto_select, BatchExecutor, ExecutionMode, SequentialExecutor};
pub use output::TokenRecord;
pub use processor::{Scanner, ScannerBuilder};

#[cfg(feature = "parallel")]
pub use executor::ParallelExecutor;

// Re-export from core for convenience
pub use linkscan_core::{run, run_utf16, Automaton, Token, TokenKind, Utf16Token};

/// Automaton over the embedded dictionaries plus `custom_protocols`
///
/// Results are cached process-wide; equivalent protocol lists (ignoring
/// case, order and duplicates) return the same `Arc`.
pub fn init<S: AsRef<str>>(custom_protocols: &[S]) -> Result<Arc<Automaton>> {
    AutomatonCache::global().get_or_build(custom_protocols)
}
