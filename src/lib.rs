//! Client-side companion for the vidgrab video-download service.
//!
//! The heart of the crate is the [`i18n`] module: it loads per-language
//! string tables from the service's static resources, caches them for the
//! session, applies them to a page surface, falls back to the default
//! language on failure, and persists the user's choice. The [`video`] module
//! is the thin client for the service's `/video-info` and `/download`
//! endpoints.

pub mod config;
pub mod i18n;
pub mod video;
