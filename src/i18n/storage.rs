//! Preferred-language persistence.
//!
//! The browser original keeps a single `preferred_language` key in
//! `localStorage`; here the durable store is a small JSON file. The trait
//! keeps the manager testable without touching the filesystem.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::i18n::Language;

/// Durable storage for the user's language choice.
pub trait PreferenceStore {
    /// The persisted preference, if one exists and is readable.
    fn preferred(&self) -> Option<Language>;

    /// Persist `lang` as the preferred language.
    fn set_preferred(&mut self, lang: &Language) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct PreferenceFile {
    preferred_language: String,
}

/// File-backed store: `{"preferred_language": "ar"}` at a fixed path.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl AsRef<Path>) -> FilePreferenceStore {
        FilePreferenceStore {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn preferred(&self) -> Option<Language> {
        // A missing or unreadable file simply means no stored preference.
        let contents = std::fs::read_to_string(&self.path).ok()?;
        let file: PreferenceFile = match serde_json::from_str(&contents) {
            Ok(file) => file,
            Err(err) => {
                debug!(
                    "Ignoring malformed preference file {}: {}",
                    self.path.display(),
                    err
                );
                return None;
            }
        };

        if file.preferred_language.trim().is_empty() {
            return None;
        }
        Some(Language::new(&file.preferred_language))
    }

    fn set_preferred(&mut self, lang: &Language) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create preference directory {}", parent.display())
                })?;
            }
        }

        let file = PreferenceFile {
            preferred_language: lang.code().to_string(),
        };
        let contents =
            serde_json::to_string_pretty(&file).context("Failed to encode language preference")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write preference file {}", self.path.display()))?;

        debug!("Persisted preferred language '{}'", lang);
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    preferred: Option<Language>,
}

impl MemoryPreferenceStore {
    pub fn new() -> MemoryPreferenceStore {
        MemoryPreferenceStore::default()
    }

    pub fn with_preferred(lang: Language) -> MemoryPreferenceStore {
        MemoryPreferenceStore {
            preferred: Some(lang),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn preferred(&self) -> Option<Language> {
        self.preferred.clone()
    }

    fn set_preferred(&mut self, lang: &Language) -> Result<()> {
        self.preferred = Some(lang.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== File Store Tests ====================

    #[test]
    fn test_missing_file_reads_as_no_preference() {
        let dir = TempDir::new().expect("temp dir");
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));
        assert!(store.preferred().is_none());
    }

    #[test]
    fn test_roundtrip() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = FilePreferenceStore::new(dir.path().join("prefs.json"));

        store
            .set_preferred(&Language::new("ar"))
            .expect("write should succeed");

        assert_eq!(store.preferred(), Some(Language::new("ar")));
    }

    #[test]
    fn test_overwrite_preference() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = FilePreferenceStore::new(dir.path().join("prefs.json"));

        store.set_preferred(&Language::new("es")).expect("write");
        store.set_preferred(&Language::new("he")).expect("write");

        assert_eq!(store.preferred(), Some(Language::new("he")));
    }

    #[test]
    fn test_file_uses_preferred_language_key() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("prefs.json");
        let mut store = FilePreferenceStore::new(&path);

        store.set_preferred(&Language::new("fa")).expect("write");

        let contents = std::fs::read_to_string(&path).expect("read back");
        let value: serde_json::Value = serde_json::from_str(&contents).expect("valid JSON");
        assert_eq!(value["preferred_language"], "fa");
    }

    #[test]
    fn test_malformed_file_reads_as_no_preference() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").expect("write");

        let store = FilePreferenceStore::new(&path);
        assert!(store.preferred().is_none());
    }

    #[test]
    fn test_empty_code_reads_as_no_preference() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"preferred_language": ""}"#).expect("write");

        let store = FilePreferenceStore::new(&path);
        assert!(store.preferred().is_none());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested/state/prefs.json");
        let mut store = FilePreferenceStore::new(&path);

        store.set_preferred(&Language::new("en")).expect("write");
        assert!(path.exists());
    }

    // ==================== Memory Store Tests ====================

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryPreferenceStore::new();
        assert!(store.preferred().is_none());

        store.set_preferred(&Language::new("ar")).expect("write");
        assert_eq!(store.preferred(), Some(Language::new("ar")));
    }

    #[test]
    fn test_memory_store_with_preferred() {
        let store = MemoryPreferenceStore::with_preferred(Language::new("es"));
        assert_eq!(store.preferred(), Some(Language::new("es")));
    }
}
