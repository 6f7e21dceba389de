//! TLD and scheme dictionaries
//!
//! The dictionaries are a versioned TOML data asset. The default asset is
//! embedded at compile time and parsed once per process; callers may load a
//! replacement from a string or a file.

use std::path::Path;
use std::sync::OnceLock;

use linkscan_core::{classify, AutomatonBuilder, LITERAL_LOCALHOST, LITERAL_MAILTO};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Default asset shipped with the crate
const EMBEDDED_ASSET: &str = include_str!("../configs/dictionaries.toml");

/// Schemes used when the embedded asset cannot be loaded
const FALLBACK_SCHEMES: [&str; 5] = ["file", "ftp", "ftps", "http", "https"];

static EMBEDDED: OnceLock<Dictionaries> = OnceLock::new();

/// Root of the TOML schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DictionaryConfig {
    pub metadata: Metadata,
    pub schemes: EntryList,
    pub tlds: EntryList,
}

/// Asset metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Metadata {
    pub version: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct EntryList {
    #[serde(default)]
    pub entries: Vec<String>,
}

impl DictionaryConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> std::result::Result<(), String> {
        if self.metadata.version.trim().is_empty() {
            return Err("metadata.version must not be empty".to_string());
        }

        if self.tlds.entries.is_empty() {
            return Err("no TLDs defined".to_string());
        }

        for (table, entries) in [("tlds", &self.tlds.entries), ("schemes", &self.schemes.entries)] {
            if let Some(bad) = entries
                .iter()
                .find(|e| e.is_empty() || !e.chars().all(|c| classify(c).is_word()))
            {
                return Err(format!("{table} entry '{bad}' must consist of letters and digits"));
            }
        }

        if let Some(reserved) = self.schemes.entries.iter().find(|e| {
            e.eq_ignore_ascii_case(LITERAL_MAILTO) || e.eq_ignore_ascii_case(LITERAL_LOCALHOST)
        }) {
            return Err(format!("'{reserved}' is built in and cannot be listed as a scheme"));
        }

        Ok(())
    }
}

/// Loaded, validated dictionaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionaries {
    version: String,
    description: String,
    schemes: Vec<String>,
    tlds: Vec<String>,
}

impl Dictionaries {
    /// The embedded default dictionaries, parsed on first access
    pub fn embedded() -> &'static Dictionaries {
        EMBEDDED.get_or_init(|| match Self::from_toml_str(EMBEDDED_ASSET) {
            Ok(dictionaries) => {
                tracing::debug!(
                    version = %dictionaries.version,
                    tlds = dictionaries.tlds.len(),
                    schemes = dictionaries.schemes.len(),
                    "loaded embedded dictionaries"
                );
                dictionaries
            }
            Err(e) => {
                tracing::warn!("failed to load embedded dictionaries, using built-in schemes only: {e}");
                Self::fallback()
            }
        })
    }

    /// Parse and validate a TOML asset
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: DictionaryConfig = toml::from_str(toml_str)?;
        config.validate().map_err(EngineError::InvalidDictionary)?;

        Ok(Self {
            version: config.metadata.version,
            description: config.metadata.description,
            schemes: config.schemes.entries,
            tlds: config.tlds.entries,
        })
    }

    /// Read, parse and validate a TOML asset from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let dictionaries = Self::from_toml_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            version = %dictionaries.version,
            "loaded dictionaries from file"
        );
        Ok(dictionaries)
    }

    fn fallback() -> Self {
        Self {
            version: "builtin".to_string(),
            description: String::new(),
            schemes: FALLBACK_SCHEMES.iter().map(|s| s.to_string()).collect(),
            tlds: Vec::new(),
        }
    }

    /// Asset version string
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Asset description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Top-level domains
    pub fn tlds(&self) -> &[String] {
        &self.tlds
    }

    /// Built-in schemes
    pub fn schemes(&self) -> &[String] {
        &self.schemes
    }

    /// Automaton builder preloaded with these dictionaries
    pub fn builder(&self) -> AutomatonBuilder {
        AutomatonBuilder::new()
            .tlds(&self.tlds)
            .schemes(&self.schemes)
    }
}
