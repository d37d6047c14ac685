//! Translation cache: in-memory store of loaded string tables.
//!
//! The cache is an owned value constructed once per session and held by the
//! `TranslationManager`; there is no ambient/global table. Entries are added
//! lazily as languages load and are never evicted. A code present as a key
//! always maps to a fully parsed table: partial results are never inserted.

use std::collections::HashMap;

use crate::i18n::Language;

/// String table for one language: translation key to display string.
///
/// Duplicate keys in the source JSON resolve last-write-wins during parsing.
pub type TranslationTable = HashMap<String, String>;

/// Per-session cache of loaded translation tables, keyed by language.
#[derive(Debug, Default)]
pub struct TranslationCache {
    tables: HashMap<Language, TranslationTable>,
}

impl TranslationCache {
    pub fn new() -> TranslationCache {
        TranslationCache::default()
    }

    /// Whether a table for `lang` has been loaded.
    pub fn contains(&self, lang: &Language) -> bool {
        self.tables.contains_key(lang)
    }

    /// The loaded table for `lang`, if any.
    pub fn get(&self, lang: &Language) -> Option<&TranslationTable> {
        self.tables.get(lang)
    }

    /// Store a fully loaded table under `lang`.
    ///
    /// Inserting the same language twice overwrites the previous table; the
    /// write is idempotent for identical resources, which makes redundant
    /// concurrent loads harmless.
    pub fn insert(&mut self, lang: Language, table: TranslationTable) {
        self.tables.insert(lang, table);
    }

    /// Number of languages currently cached.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
