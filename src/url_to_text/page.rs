use super::fetchers::{HeaderProfile, RequestFetcher};
use super::html::extractors::{first_success, JsonLdExtractor, PageTextExtractor, ParsingContext};
use super::PageMiner;
use crate::config::FetchConfig;
use crate::model::{ContentSource, MinedContent};
use async_trait::async_trait;
use log::{info, warn};
use std::time::Duration;

/// Mines an arbitrary recipe page: structured data first, visible text otherwise.
pub struct GenericPageMiner {
    fetcher: RequestFetcher,
    max_chars: usize,
}

impl GenericPageMiner {
    pub fn new(config: &FetchConfig) -> Self {
        Self::with_limits(config.timeout(), config.max_text_chars)
    }

    pub fn with_limits(timeout: Duration, max_chars: usize) -> Self {
        Self {
            fetcher: RequestFetcher::new(Some(timeout), HeaderProfile::Navigation),
            max_chars,
        }
    }
}

/// Mine already-fetched HTML. The visible-text strategy always succeeds, so
/// the `raw-url` fallback only happens when there are no strategies to run.
pub fn mine_html(url: &str, html: String, max_chars: usize) -> MinedContent {
    let context = ParsingContext::new(url, html);
    let page_text = PageTextExtractor { max_chars };

    first_success(&[&JsonLdExtractor, &page_text], &context)
        .unwrap_or_else(|| MinedContent::new(url, ContentSource::RawUrl))
}

#[async_trait]
impl PageMiner for GenericPageMiner {
    fn name(&self) -> &str {
        "page"
    }

    async fn mine(&self, url: &str) -> MinedContent {
        info!("Fetching URL: {}", url);
        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Failed to fetch URL {}: {}", url, e);
                return MinedContent::new(url, ContentSource::RawUrl);
            }
        };

        let mined = mine_html(url, html, self.max_chars);
        if mined.source == ContentSource::HtmlText {
            info!("No JSON-LD Recipe in {}, falling back to page text", url);
        }
        mined
    }
}
