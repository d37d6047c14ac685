use anyhow::Result;
use tracing::{info, warn};

use vidgrab_client::config::Config;
use vidgrab_client::i18n::{
    FilePreferenceStore, PageElement, PageModel, TranslationLoader, TranslationManager,
};
use vidgrab_client::video::{DownloadStatus, VideoClient};

/// The page's `data-i18n` tagged elements with their untranslated defaults.
fn default_page() -> PageModel {
    PageModel::new(vec![
        PageElement::text("title", "title", "Video Downloader"),
        PageElement::text("tagline", "tagline", "Download videos in one click"),
        PageElement::input("url", "url_placeholder", "Paste your video URL here"),
        PageElement::text("download-button", "download_button", "Download"),
        PageElement::text("paste-button", "paste_button", "Paste"),
        PageElement::text("faq-heading", "faq_heading", "Frequently Asked Questions"),
    ])
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vidgrab_client=info".parse()?),
        )
        .init();

    info!("Starting vidgrab client session");

    // Load configuration from environment
    let config = Config::from_env()?;
    let client = reqwest::Client::new();

    // Step 1: Bring the page into the user's language
    let loader = TranslationLoader::new(
        client.clone(),
        &config.backend_url,
        &config.translations_path,
    );
    let store = FilePreferenceStore::new(&config.preference_file);
    let mut manager = TranslationManager::new(loader, store);
    let mut page = default_page();

    let system_locale = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LANG"))
        .ok();

    if let Err(err) = manager.initialize(&mut page, system_locale.as_deref()).await {
        // The page stays usable with its built-in strings.
        warn!("Translations unavailable, continuing untranslated: {}", err);
    }

    // Step 2: Handle a video URL when one was given
    let Some(url) = std::env::args().nth(1) else {
        info!("No video URL given, nothing to download");
        return Ok(());
    };

    let video = VideoClient::new(client, &config.backend_url);

    info!("Fetching video info");
    let video_info = video.video_info(&url).await?;
    info!(
        "{}: {} ({}, {})",
        page.element("title").map(|e| e.text.as_str()).unwrap_or("Video"),
        video_info.title,
        video_info.duration,
        video_info.format
    );

    info!("Requesting download");
    match video.request_download(&url).await? {
        DownloadStatus::InProgress(percent) => info!("Downloading: {:.1}%", percent),
        DownloadStatus::Finished(message) => info!("{}", message),
    }

    Ok(())
}
