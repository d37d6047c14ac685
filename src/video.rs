//! Client for the video-download backend.
//!
//! The backend exposes two JSON endpoints: `POST /video-info` returns
//! metadata for a URL, `POST /download` starts a download and answers with
//! either a yt-dlp style percentage string ("45.2%") or a terminal message.
//! Error bodies carry a `detail` field which is surfaced to the user.

use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Serialize)]
struct VideoRequest<'a> {
    url: &'a str,
}

/// Metadata for a video URL as reported by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    /// Human-readable duration (e.g., "1 minute and 30 seconds").
    pub duration: String,
    pub format: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Whether the video passes the backend's duration limit.
    #[serde(default)]
    pub valid: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct DownloadResponse {
    progress: Option<String>,
    message: Option<String>,
}

/// Outcome of a download request.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadStatus {
    /// Download still running; percentage complete.
    InProgress(f32),
    /// Terminal status message from the backend.
    Finished(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
}

/// Extract the numeric percentage from strings like "45.2%" or " 5.0%".
pub fn parse_percent(raw: &str) -> Option<f32> {
    static PERCENT_RE: OnceLock<Regex> = OnceLock::new();
    let re = PERCENT_RE
        .get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)\s*%").expect("percent regex is valid"));

    re.captures(raw)?.get(1)?.as_str().parse().ok()
}

/// HTTP client for the download service's backend endpoints.
#[derive(Debug, Clone)]
pub struct VideoClient {
    client: reqwest::Client,
    base_url: String,
}

impl VideoClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> VideoClient {
        VideoClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch title, duration, and format for a video URL.
    pub async fn video_info(&self, url: &str) -> Result<VideoInfo> {
        let url = valid_url(url)?;

        let response = self
            .client
            .post(format!("{}/video-info", self.base_url))
            .json(&VideoRequest { url })
            .send()
            .await
            .context("Failed to send video-info request")?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = error_detail(response).await;
            anyhow::bail!("Video info request failed ({}): {}", status, detail);
        }

        let info: VideoInfo = response
            .json()
            .await
            .context("Failed to parse video-info response")?;

        info!("Fetched info for '{}' ({})", info.title, info.duration);
        Ok(info)
    }

    /// Ask the backend to download a video URL.
    pub async fn request_download(&self, url: &str) -> Result<DownloadStatus> {
        let url = valid_url(url)?;

        let response = self
            .client
            .post(format!("{}/download", self.base_url))
            .json(&VideoRequest { url })
            .send()
            .await
            .context("Failed to send download request")?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = error_detail(response).await;
            anyhow::bail!("Download request failed ({}): {}", status, detail);
        }

        let body: DownloadResponse = response
            .json()
            .await
            .context("Failed to parse download response")?;

        if let Some(raw) = body.progress {
            let percent = parse_percent(&raw)
                .with_context(|| format!("Unparsable progress value '{}'", raw))?;
            return Ok(DownloadStatus::InProgress(percent));
        }

        match body.message {
            Some(message) => Ok(DownloadStatus::Finished(message)),
            None => anyhow::bail!("Download response contained neither progress nor message"),
        }
    }
}

fn valid_url(url: &str) -> Result<&str> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Please enter a valid URL");
    }
    Ok(trimmed)
}

/// Best-effort extraction of a FastAPI-style error body.
async fn error_detail(response: reqwest::Response) -> String {
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => return format!("<failed to read body: {}>", err),
    };

    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed
            .detail
            .or(parsed.message)
            .unwrap_or(body),
        Err(_) => body,
    }
}
