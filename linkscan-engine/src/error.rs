//! Engine error types

use linkscan_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Automaton construction failed
    #[error("automaton build error: {0}")]
    Core(#[from] CoreError),

    /// Dictionary asset is not valid TOML for the expected schema
    #[error("failed to parse dictionary asset: {0}")]
    DictionaryParse(#[from] toml::de::Error),

    /// Dictionary asset parsed but failed validation
    #[error("invalid dictionary asset: {0}")]
    InvalidDictionary(String),

    /// I/O error while reading a dictionary asset
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Token serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
