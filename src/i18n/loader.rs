//! Translation loader: fetches per-language string tables over HTTP.
//!
//! Tables live at a conventional static path, `{base}{path}/{code}.json`,
//! with a flat key-to-string JSON object body. A single fetch is one request:
//! no retry and no timeout beyond what the transport itself reports. Failure
//! classification (network vs status vs body) is what the manager's fallback
//! logic keys off, so it is a typed error rather than `anyhow`.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::i18n::{Language, TranslationTable};

/// Failure to load a translation resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, transport).
    #[error("translation request for '{lang}' failed: {source}")]
    Request {
        lang: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("translation resource for '{lang}' returned {status}")]
    Status { lang: String, status: StatusCode },

    /// The response body was not a flat JSON string table.
    #[error("translation resource for '{lang}' is malformed: {source}")]
    Parse {
        lang: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Fetches translation tables from the service's static resources.
#[derive(Debug, Clone)]
pub struct TranslationLoader {
    client: reqwest::Client,
    base_url: String,
    path: String,
}

impl TranslationLoader {
    /// Create a loader for `{base_url}{path}/{code}.json` resources.
    pub fn new(client: reqwest::Client, base_url: &str, path: &str) -> TranslationLoader {
        TranslationLoader {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            path: path.trim_end_matches('/').to_string(),
        }
    }

    /// Resource URL for a language.
    pub fn resource_url(&self, lang: &Language) -> String {
        format!("{}{}/{}.json", self.base_url, self.path, lang.code())
    }

    /// Fetch and parse the string table for `lang`.
    pub async fn fetch(&self, lang: &Language) -> Result<TranslationTable, FetchError> {
        let url = self.resource_url(lang);
        debug!("Fetching translations for '{}' from {}", lang, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                lang: lang.code().to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                lang: lang.code().to_string(),
                status: response.status(),
            });
        }

        let table: TranslationTable =
            response
                .json()
                .await
                .map_err(|source| FetchError::Parse {
                    lang: lang.code().to_string(),
                    source,
                })?;

        debug!("Loaded {} translation keys for '{}'", table.len(), lang);
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn loader_for(server: &MockServer) -> TranslationLoader {
        TranslationLoader::new(
            reqwest::Client::new(),
            &server.uri(),
            "/static/translations",
        )
    }

    // ==================== URL Construction Tests ====================

    #[test]
    fn test_resource_url_format() {
        let loader = TranslationLoader::new(
            reqwest::Client::new(),
            "http://localhost:8080",
            "/static/translations",
        );
        assert_eq!(
            loader.resource_url(&Language::new("ar")),
            "http://localhost:8080/static/translations/ar.json"
        );
    }

    #[test]
    fn test_resource_url_strips_trailing_slashes() {
        let loader = TranslationLoader::new(
            reqwest::Client::new(),
            "http://localhost:8080/",
            "/static/translations/",
        );
        assert_eq!(
            loader.resource_url(&Language::new("en")),
            "http://localhost:8080/static/translations/en.json"
        );
    }

    // ==================== Fetch Tests ====================

    #[tokio::test]
    async fn test_fetch_success_returns_all_keys() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/static/translations/en.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "title": "Video Downloader",
                "download_button": "Download",
            })))
            .mount(&server)
            .await;

        let table = loader_for(&server)
            .fetch(&Language::new("en"))
            .await
            .expect("fetch should succeed");

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("title").map(String::as_str),
            Some("Video Downloader")
        );
        assert_eq!(
            table.get("download_button").map(String::as_str),
            Some("Download")
        );
    }

    #[tokio::test]
    async fn test_fetch_404_is_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/static/translations/xx.json"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
            .mount(&server)
            .await;

        let err = loader_for(&server)
            .fetch(&Language::new("xx"))
            .await
            .expect_err("404 should fail");

        match err {
            FetchError::Status { lang, status } => {
                assert_eq!(lang, "xx");
                assert_eq!(status.as_u16(), 404);
            }
            other => panic!("expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_500_is_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/static/translations/en.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = loader_for(&server)
            .fetch(&Language::new("en"))
            .await
            .expect_err("500 should fail");

        assert!(matches!(err, FetchError::Status { .. }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/static/translations/en.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let err = loader_for(&server)
            .fetch(&Language::new("en"))
            .await
            .expect_err("garbage body should fail");

        assert!(matches!(err, FetchError::Parse { .. }));
        assert!(err.to_string().contains("malformed"));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_server_is_request_error() {
        // Port 1 is practically never listening.
        let loader = TranslationLoader::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1",
            "/static/translations",
        );

        let err = loader
            .fetch(&Language::new("en"))
            .await
            .expect_err("connection should fail");

        assert!(matches!(err, FetchError::Request { .. }));
    }

    #[tokio::test]
    async fn test_fetch_empty_table() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/static/translations/en.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let table = loader_for(&server)
            .fetch(&Language::new("en"))
            .await
            .expect("empty object is a valid table");

        assert!(table.is_empty());
    }
}
