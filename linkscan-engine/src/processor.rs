//! Scanner facade and builder

use std::sync::Arc;

use linkscan_core::{Automaton, Token, Utf16Token};

use crate::{
    cache::AutomatonCache,
    config::ScannerConfig,
    dictionaries::Dictionaries,
    error::Result,
    executor::{executor_for, ExecutionMode},
    output::{self, TokenRecord},
};

/// Tokenizer bound to one automaton and one execution configuration
///
/// Cloning is cheap; clones share the automaton.
#[derive(Debug, Clone)]
pub struct Scanner {
    automaton: Arc<Automaton>,
    config: ScannerConfig,
}

impl Scanner {
    /// Scanner over the embedded dictionaries with no custom protocols
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Scanner over the embedded dictionaries with extra protocols
    pub fn with_protocols<S: AsRef<str>>(custom_protocols: &[S]) -> Result<Self> {
        Self::builder().custom_protocols(custom_protocols).build()
    }

    /// Create a builder
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::new()
    }

    /// Scanner over an already built automaton
    pub fn from_automaton(automaton: Arc<Automaton>, config: ScannerConfig) -> Self {
        Self { automaton, config }
    }

    /// Tokenize UTF-8 text
    pub fn run<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        linkscan_core::run(&self.automaton, text)
    }

    /// Tokenize UTF-16 code units
    pub fn run_utf16<'a>(&self, units: &'a [u16]) -> Vec<Utf16Token<'a>> {
        linkscan_core::run_utf16(&self.automaton, units)
    }

    /// Tokenize independent texts, returning results in input order
    pub fn run_batch<'a>(&self, texts: &[&'a str]) -> Vec<Vec<Token<'a>>> {
        let total_bytes: usize = texts.iter().map(|t| t.len()).sum();
        let mode = self.config.resolve(total_bytes);
        tracing::trace!(texts = texts.len(), total_bytes, ?mode, "scanning batch");
        executor_for(mode).run_batch(&self.automaton, texts)
    }

    /// Tokenize into owned records
    pub fn records(&self, text: &str) -> Vec<TokenRecord> {
        self.run(text).iter().map(TokenRecord::from).collect()
    }

    /// Tokenize into a JSON array of records
    pub fn to_json(&self, text: &str) -> Result<String> {
        output::to_json(&self.run(text))
    }

    /// Shared automaton
    pub fn automaton(&self) -> &Arc<Automaton> {
        &self.automaton
    }

    /// Active configuration
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }
}

/// Builder for [`Scanner`]
#[derive(Debug, Clone, Default)]
pub struct ScannerBuilder {
    custom_protocols: Vec<String>,
    dictionaries: Option<Arc<Dictionaries>>,
    config: ScannerConfig,
}

impl ScannerBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra schemes recognized before `:`
    pub fn custom_protocols<I, S>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.custom_protocols = protocols
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        self
    }

    /// Use these dictionaries instead of the embedded asset
    pub fn dictionaries(mut self, dictionaries: Arc<Dictionaries>) -> Self {
        self.dictionaries = Some(dictionaries);
        self
    }

    /// Set execution mode for batches
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the adaptive parallel threshold in bytes
    pub fn parallel_threshold(mut self, bytes: usize) -> Self {
        self.config.parallel_threshold = bytes;
        self
    }

    /// Build the scanner
    ///
    /// With the embedded dictionaries the automaton comes from the
    /// process-wide cache; custom dictionaries always build a fresh one.
    pub fn build(self) -> Result<Scanner> {
        let automaton = match &self.dictionaries {
            None => AutomatonCache::global().get_or_build(self.custom_protocols.as_slice())?,
            Some(dictionaries) => Arc::new(
                dictionaries
                    .builder()
                    .custom_protocols(&self.custom_protocols)
                    .build()?,
            ),
        };

        Ok(Scanner {
            automaton,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkscan_core::TokenKind;

    fn kinds(tokens: &[Token<'_>]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_default_scanner() {
        let scanner = Scanner::new().unwrap();
        let tokens = scanner.run("https://example.com");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Protocol,
                TokenKind::Slash,
                TokenKind::Slash,
                TokenKind::Domain,
                TokenKind::Dot,
                TokenKind::Tld,
            ]
        );
    }

    #[test]
    fn test_default_scanners_share_automaton() {
        let a = Scanner::new().unwrap();
        let b = Scanner::builder().build().unwrap();
        assert!(Arc::ptr_eq(a.automaton(), b.automaton()));
    }

    #[test]
    fn test_with_protocols() {
        let scanner = Scanner::with_protocols(&["steam"]).unwrap();
        assert_eq!(scanner.run("steam:")[0].kind, TokenKind::Protocol);
        assert_eq!(scanner.automaton().custom_protocols(), &["steam"]);
    }

    #[test]
    fn test_invalid_protocol() {
        assert!(Scanner::with_protocols(&["no-dash"]).is_err());
    }

    #[test]
    fn test_custom_dictionaries() {
        let dictionaries = Dictionaries::from_toml_str(
            "[metadata]\nversion = \"t\"\n[schemes]\nentries = [\"gopher\"]\n[tlds]\nentries = [\"zz\"]\n",
        )
        .unwrap();
        let scanner = Scanner::builder()
            .dictionaries(Arc::new(dictionaries))
            .build()
            .unwrap();

        assert_eq!(scanner.run("zz")[0].kind, TokenKind::Tld);
        assert_eq!(scanner.run("com")[0].kind, TokenKind::Domain);
        assert_eq!(scanner.run("gopher:")[0].kind, TokenKind::Protocol);
        assert_eq!(scanner.run("http:")[0].kind, TokenKind::Domain);
    }

    #[test]
    fn test_builder_config() {
        let scanner = Scanner::builder()
            .execution_mode(ExecutionMode::Sequential)
            .parallel_threshold(10)
            .build()
            .unwrap();
        assert_eq!(scanner.config().execution_mode, ExecutionMode::Sequential);
        assert_eq!(scanner.config().parallel_threshold, 10);
    }

    #[test]
    fn test_run_batch_order() {
        let scanner = Scanner::builder().parallel_threshold(0).build().unwrap();
        let results = scanner.run_batch(&["a b", "", "x.com"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].len(), 3);
        assert!(results[1].is_empty());
        assert_eq!(results[2][2].kind, TokenKind::Tld);
    }

    #[test]
    fn test_records_and_json() {
        let scanner = Scanner::new().unwrap();
        let records = scanner.records("a@b.com");
        assert_eq!(records.len(), 5);
        assert_eq!(records[1].kind, "AT");

        let json = scanner.to_json("hi").unwrap();
        assert_eq!(json, r#"[{"kind":"DOMAIN","value":"hi","start":0,"end":2}]"#);
    }

    #[test]
    fn test_run_utf16() {
        let scanner = Scanner::new().unwrap();
        let units: Vec<u16> = "go.com".encode_utf16().collect();
        let tokens = scanner.run_utf16(&units);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].kind, TokenKind::Tld);
    }
}
