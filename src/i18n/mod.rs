//! Internationalization (i18n) module.
//!
//! Everything needed to keep the page in the user's language lives here:
//! loading per-language string tables from the service's static resources,
//! caching them for the session, applying them through the renderer seam,
//! and persisting the chosen language across sessions.
//!
//! # Architecture
//!
//! - `language`: normalized language codes and text direction
//! - `cache`: per-session table cache (owned, no globals)
//! - `loader`: HTTP fetch of `{code}.json` resources with a typed error
//! - `renderer`: the page surface the manager writes to
//! - `storage`: durable preferred-language store
//! - `manager`: composition of the above (load / apply / change / initialize)
//!
//! # Example
//!
//! ```rust,ignore
//! let loader = TranslationLoader::new(client, &config.backend_url, &config.translations_path);
//! let store = FilePreferenceStore::new(&config.preference_file);
//! let mut manager = TranslationManager::new(loader, store);
//! manager.initialize(&mut page, std::env::var("LANG").ok().as_deref()).await?;
//! ```

mod cache;
mod language;
mod loader;
mod manager;
mod renderer;
mod storage;

pub use cache::{TranslationCache, TranslationTable};
pub use language::{Direction, Language};
pub use loader::{FetchError, TranslationLoader};
pub use manager::TranslationManager;
pub use renderer::{PageElement, PageModel, Renderer, TaggedElement};
pub use storage::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
