//! Language type: normalized language codes and text direction.
//!
//! Translation resources are keyed by short language codes ("en", "ar").
//! Codes are not limited to a fixed registry: any code the server has a
//! resource for can be requested, and unknown codes simply fail to load and
//! fall back to the default.

use std::fmt;

/// Language codes whose scripts are written right-to-left.
const RTL_LANGUAGES: [&str; 3] = ["ar", "fa", "he"];

/// Text direction of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// The value written to the document's `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// A normalized language code (e.g., "en", "ar").
///
/// Construction lowercases the code and strips surrounding whitespace so that
/// cache keys and resource paths are consistent regardless of how the code was
/// obtained (user selection, preference file, system locale).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language {
    code: String,
}

impl Language {
    /// Code of the default language, used as the fallback target when any
    /// other language fails to load.
    pub const DEFAULT_CODE: &'static str = "en";

    /// Create a Language from a code string.
    pub fn new(code: &str) -> Language {
        Language {
            code: code.trim().to_ascii_lowercase(),
        }
    }

    /// The default language.
    pub fn default_language() -> Language {
        Language::new(Self::DEFAULT_CODE)
    }

    /// Create a Language from a full locale identifier, keeping only the
    /// primary subtag: "fr-CA" and "fr_CA.UTF-8" both yield "fr".
    ///
    /// Returns `None` when no usable subtag remains (empty input, "C",
    /// "POSIX").
    pub fn from_locale(locale: &str) -> Option<Language> {
        let primary = locale
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or("")
            .trim();

        if primary.is_empty()
            || primary.eq_ignore_ascii_case("c")
            || primary.eq_ignore_ascii_case("posix")
        {
            return None;
        }

        Some(Language::new(primary))
    }

    /// The language code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether this is the default (fallback) language.
    pub fn is_default(&self) -> bool {
        self.code == Self::DEFAULT_CODE
    }

    /// Text direction for this language.
    pub fn direction(&self) -> Direction {
        if RTL_LANGUAGES.contains(&self.code.as_str()) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
