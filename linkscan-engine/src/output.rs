//! Owned token records for serialized output

use linkscan_core::{Token, Utf16Token};
use serde::{Deserialize, Serialize};

/// Owned, serializable form of a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Kind name, e.g. `"DOMAIN"`
    pub kind: String,
    /// Matched text
    pub value: String,
    /// Code-point offset of the first character
    pub start: usize,
    /// Code-point offset one past the last character
    pub end: usize,
}

impl From<&Token<'_>> for TokenRecord {
    fn from(token: &Token<'_>) -> Self {
        Self {
            kind: token.kind.name().to_string(),
            value: token.value.to_string(),
            start: token.start,
            end: token.end,
        }
    }
}

impl From<&Utf16Token<'_>> for TokenRecord {
    fn from(token: &Utf16Token<'_>) -> Self {
        Self {
            kind: token.kind.name().to_string(),
            value: token.to_string_lossy(),
            start: token.start,
            end: token.end,
        }
    }
}

/// Serialize tokens as a JSON array of records
pub fn to_json(tokens: &[Token<'_>]) -> crate::Result<String> {
    let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}
