//! Fetching and mining third-party pages into prompt content.

pub mod fetchers;
pub mod html;
mod page;
mod youtube;

pub use page::GenericPageMiner;
pub use youtube::YouTubeMiner;

use crate::model::MinedContent;
use async_trait::async_trait;

/// Turns a target (a URL, or a video id) into prompt content.
///
/// Mining is best-effort: implementations absorb every failure and answer
/// with fallback content tagged `raw-url` instead of an error.
#[async_trait]
pub trait PageMiner: Send + Sync {
    fn name(&self) -> &str;
    async fn mine(&self, target: &str) -> MinedContent;
}
