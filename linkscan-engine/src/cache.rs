//! Per-configuration automaton cache
//!
//! Automatons are immutable, so one instance per distinct custom-protocol
//! set is shared by every scanner and thread that asks for it.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use linkscan_core::Automaton;

use crate::dictionaries::Dictionaries;
use crate::error::Result;

/// Cache key: folded, deduplicated, sorted protocol names
type CacheKey = Vec<String>;

/// Cache of built automatons keyed by their custom protocols
#[derive(Debug)]
pub struct AutomatonCache {
    dictionaries: Arc<Dictionaries>,
    entries: RwLock<HashMap<CacheKey, Arc<Automaton>>>,
}

impl AutomatonCache {
    /// Create an empty cache over the given dictionaries
    pub fn new(dictionaries: Arc<Dictionaries>) -> Self {
        Self {
            dictionaries,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Process-wide cache over the embedded dictionaries
    pub fn global() -> &'static AutomatonCache {
        static GLOBAL: OnceLock<AutomatonCache> = OnceLock::new();
        GLOBAL.get_or_init(|| AutomatonCache::new(Arc::new(Dictionaries::embedded().clone())))
    }

    /// Dictionaries every automaton in this cache is built from
    pub fn dictionaries(&self) -> &Arc<Dictionaries> {
        &self.dictionaries
    }

    /// Return the automaton for `custom_protocols`, building it on first use
    ///
    /// Protocol lists that differ only in case, order or duplicates share one
    /// automaton. Invalid protocol names are reported and nothing is cached.
    pub fn get_or_build<S: AsRef<str>>(&self, custom_protocols: &[S]) -> Result<Arc<Automaton>> {
        let key = cache_key(custom_protocols);

        if let Some(automaton) = self.read_entry(&key) {
            tracing::trace!(protocols = ?key, "automaton cache hit");
            return Ok(automaton);
        }

        // Build outside the lock; a concurrent builder of the same key is harmless
        let automaton = Arc::new(
            self.dictionaries
                .builder()
                .custom_protocols(custom_protocols)
                .build()?,
        );

        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let cached = entries.entry(key).or_insert(automaton);
        Ok(Arc::clone(cached))
    }

    /// Number of cached automatons
    pub fn len(&self) -> usize {
        match self.entries.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Whether nothing has been built yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached automaton
    pub fn clear(&self) {
        match self.entries.write() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    fn read_entry(&self, key: &CacheKey) -> Option<Arc<Automaton>> {
        let entries = match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.get(key).cloned()
    }
}

fn cache_key<S: AsRef<str>>(custom_protocols: &[S]) -> CacheKey {
    let mut key: Vec<String> = custom_protocols
        .iter()
        .map(|p| p.as_ref().to_ascii_lowercase())
        .collect();
    key.sort_unstable();
    key.dedup();
    key
}
