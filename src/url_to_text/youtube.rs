use super::fetchers::{HeaderProfile, RequestFetcher};
use super::html::extractors::{
    first_success, meta_property, OgDescriptionExtractor, ParsingContext, YtInitialDataExtractor,
};
use super::PageMiner;
use crate::config::FetchConfig;
use crate::model::{ContentSource, MinedContent};
use async_trait::async_trait;
use log::{info, warn};
use std::time::Duration;

/// Mines the title and description of a YouTube video from its watch page.
pub struct YouTubeMiner {
    fetcher: RequestFetcher,
    base_url: String,
}

impl YouTubeMiner {
    pub fn new(config: &FetchConfig) -> Self {
        Self::with_base_url(config.youtube_base_url.clone(), config.timeout())
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            fetcher: RequestFetcher::new(Some(timeout), HeaderProfile::Basic),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn watch_url(&self, video_id: &str) -> String {
        format!("{}/watch?v={}", self.base_url, video_id)
    }
}

/// Build prompt content from a fetched watch page.
pub fn describe_video(url: &str, html: String) -> MinedContent {
    let context = ParsingContext::new(url, html);
    let title = meta_property(&context.document, "og:title").unwrap_or_default();

    match first_success(&[&YtInitialDataExtractor, &OgDescriptionExtractor], &context) {
        Some(description) => {
            info!(
                "Extracted YouTube description ({}), length: {}",
                description.source,
                description.text.len()
            );
            MinedContent::new(
                format!("Video Title: {}\n\nDescription:\n{}", title, description.text),
                description.source,
            )
        }
        None => {
            warn!("No description found for YouTube video {}", url);
            MinedContent::new(
                format!(
                    "Video Title: {}\n\nNote: No description found. Please paste the recipe from the video description manually.",
                    title
                ),
                ContentSource::YouTubeMeta,
            )
        }
    }
}

#[async_trait]
impl PageMiner for YouTubeMiner {
    fn name(&self) -> &str {
        "youtube"
    }

    async fn mine(&self, video_id: &str) -> MinedContent {
        info!("Detected YouTube video: {}", video_id);
        let url = self.watch_url(video_id);

        match self.fetcher.fetch(&url).await {
            Ok(html) => describe_video(&url, html),
            Err(e) => {
                warn!("Failed to fetch YouTube page {}: {}", url, e);
                MinedContent::new("", ContentSource::RawUrl)
            }
        }
    }
}
