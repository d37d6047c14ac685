//! Translation manager: keeps the visible page in the user's language.
//!
//! Composes the loader, cache, preference store, and renderer seam. The
//! fallback to the default language is an explicit two-step resolution
//! (`ensure_loaded`): attempt the requested code, else attempt "en", else
//! propagate the error. The substitution is silent toward the caller apart
//! from a logged warning.

use tracing::{info, warn};

use crate::i18n::{
    FetchError, Language, PreferenceStore, Renderer, TranslationCache, TranslationLoader,
    TranslationTable,
};

pub struct TranslationManager<S: PreferenceStore> {
    loader: TranslationLoader,
    cache: TranslationCache,
    store: S,
}

impl<S: PreferenceStore> TranslationManager<S> {
    /// Create a manager with an empty cache for this page session.
    pub fn new(loader: TranslationLoader, store: S) -> TranslationManager<S> {
        TranslationManager {
            loader,
            cache: TranslationCache::new(),
            store,
        }
    }

    /// The session cache (read-only).
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// The persisted preference, if any.
    pub fn preferred(&self) -> Option<Language> {
        self.store.preferred()
    }

    /// Ensure a table is cached for `lang` or its fallback.
    ///
    /// Returns the language whose table actually ended up cached: the
    /// requested one on success, the default on fallback. The failed
    /// requested code is never inserted, so a later call re-attempts it.
    pub async fn ensure_loaded(&mut self, lang: &Language) -> Result<Language, FetchError> {
        if self.cache.contains(lang) {
            return Ok(lang.clone());
        }

        match self.loader.fetch(lang).await {
            Ok(table) => {
                self.cache.insert(lang.clone(), table);
                Ok(lang.clone())
            }
            Err(err) if !lang.is_default() => {
                warn!(
                    "Failed to load translations for '{}', falling back to '{}': {}",
                    lang,
                    Language::DEFAULT_CODE,
                    err
                );
                let default = Language::default_language();
                if !self.cache.contains(&default) {
                    let table = self.loader.fetch(&default).await?;
                    self.cache.insert(default.clone(), table);
                }
                Ok(default)
            }
            Err(err) => Err(err),
        }
    }

    /// Load the string table for `lang`, consulting the cache first.
    ///
    /// On a cache hit no request is made. On failure for a non-default
    /// language the default's table is loaded and returned instead; on
    /// failure for the default itself the error propagates.
    pub async fn load(&mut self, lang: &Language) -> Result<&TranslationTable, FetchError> {
        let effective = self.ensure_loaded(lang).await?;
        Ok(self
            .cache
            .get(&effective)
            .expect("resolved language is always cached"))
    }

    /// Apply the cached table for `lang` to the page.
    ///
    /// No-op with a logged diagnostic when `lang` is not cached. Elements
    /// whose key is absent from the table keep their current content.
    pub fn apply<R: Renderer>(&self, lang: &Language, renderer: &mut R) {
        let Some(table) = self.cache.get(lang) else {
            warn!("No translations loaded for '{}', leaving page unchanged", lang);
            return;
        };

        renderer.set_direction(lang.direction());

        for element in renderer.tagged_elements() {
            if let Some(value) = table.get(&element.key) {
                if element.wants_placeholder {
                    renderer.set_placeholder(&element.id, value);
                } else {
                    renderer.set_text(&element.id, value);
                }
            }
        }

        renderer.set_language(lang);
    }

    /// Switch the page to `lang`: load (cache permitting), apply, persist.
    ///
    /// The *requested* code is persisted even when the applied table came
    /// from the fallback, matching the original front end's behavior. A
    /// failed preference write is logged, not propagated.
    pub async fn change_language<R: Renderer>(
        &mut self,
        lang: &Language,
        renderer: &mut R,
    ) -> Result<(), FetchError> {
        let effective = self.ensure_loaded(lang).await?;
        self.apply(&effective, renderer);

        if let Err(err) = self.store.set_preferred(lang) {
            warn!("Failed to persist preferred language '{}': {}", lang, err);
        }
        Ok(())
    }

    /// One-time page setup: resolve the initial language and apply it.
    ///
    /// Priority: persisted preference, else the system locale's primary
    /// subtag, else the default. Also points the language selector at the
    /// initial code.
    pub async fn initialize<R: Renderer>(
        &mut self,
        renderer: &mut R,
        system_locale: Option<&str>,
    ) -> Result<(), FetchError> {
        let initial = self
            .store
            .preferred()
            .or_else(|| system_locale.and_then(Language::from_locale))
            .unwrap_or_else(Language::default_language);

        info!("Initializing page language as '{}'", initial);

        let effective = self.ensure_loaded(&initial).await?;
        self.apply(&effective, renderer);
        renderer.set_selector_value(&initial);
        Ok(())
    }
}
