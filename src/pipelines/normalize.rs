use crate::classifier::classify;
use crate::config::FetchConfig;
use crate::model::{ContentKind, ContentSource, MinedContent};
use crate::url_to_text::{GenericPageMiner, PageMiner, YouTubeMiner};
use log::{debug, warn};

/// Turns raw user input into the content string embedded in the prompt.
pub struct ContentNormalizer {
    youtube: Box<dyn PageMiner>,
    page: Box<dyn PageMiner>,
}

impl ContentNormalizer {
    pub fn new(config: &FetchConfig) -> Self {
        Self::with_miners(
            Box::new(YouTubeMiner::new(config)),
            Box::new(GenericPageMiner::new(config)),
        )
    }

    pub fn with_miners(youtube: Box<dyn PageMiner>, page: Box<dyn PageMiner>) -> Self {
        Self { youtube, page }
    }

    /// Content to parse. Never fails; mining problems degrade to `raw`.
    pub async fn normalize(&self, raw: &str) -> String {
        self.mine(raw).await.text
    }

    /// Like [`normalize`](Self::normalize) but keeps the provenance tag.
    pub async fn mine(&self, raw: &str) -> MinedContent {
        let (miner, target) = match classify(raw) {
            ContentKind::PlainText => {
                return MinedContent::new(raw, ContentSource::PlainText);
            }
            ContentKind::YouTubeUrl { video_id } => (&self.youtube, video_id),
            ContentKind::GenericUrl { url } => (&self.page, url),
        };

        let mined = miner.mine(&target).await;
        if mined.is_fallback() {
            warn!(
                "{} miner gave up on {}, sending the input as-is",
                miner.name(),
                target
            );
            return MinedContent::new(raw, ContentSource::RawUrl);
        }

        debug!(
            "{} miner produced {} chars ({})",
            miner.name(),
            mined.text.len(),
            mined.source
        );
        mined
    }
}
