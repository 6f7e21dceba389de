//! Core error types (build-time only)
//!
//! Scanning is total; only automaton construction can fail.

use thiserror::Error;

/// Errors raised while building an automaton
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Custom protocol names must be non-empty ASCII letters and digits
    #[error("invalid custom protocol '{name}': only ASCII letters and digits are allowed")]
    InvalidProtocol {
        /// The rejected protocol name
        name: String,
    },

    /// Dictionary entries must be non-empty runs of word characters
    #[error("invalid {dictionary} entry '{entry}': entries must consist of letters and digits")]
    InvalidDictionaryEntry {
        /// Which dictionary held the entry ("tld" or "scheme")
        dictionary: &'static str,
        /// The rejected entry
        entry: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_protocol_display() {
        let error = CoreError::InvalidProtocol {
            name: "web+cal".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid custom protocol 'web+cal': only ASCII letters and digits are allowed"
        );
    }

    #[test]
    fn test_invalid_dictionary_entry_display() {
        let error = CoreError::InvalidDictionaryEntry {
            dictionary: "tld",
            entry: "co.uk".to_string(),
        };
        assert!(error.to_string().starts_with("invalid tld entry 'co.uk'"));
    }
}
