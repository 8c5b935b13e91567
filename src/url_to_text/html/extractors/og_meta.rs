use super::{Extractor, ParsingContext};
use crate::error::MiningError;
use crate::model::{ContentSource, MinedContent};
use scraper::{Html, Selector};

/// Content of `<meta property="{property}">`, if present and non-empty.
pub fn meta_property(document: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[property="{property}"]"#)).ok()?;
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
        .map(str::to_string)
}

/// Open Graph description, the short fallback when the full video
/// description is unavailable.
pub struct OgDescriptionExtractor;

impl Extractor for OgDescriptionExtractor {
    fn name(&self) -> &'static str {
        "og_description"
    }

    fn extract(&self, context: &ParsingContext) -> Result<MinedContent, MiningError> {
        meta_property(&context.document, "og:description")
            .map(|description| MinedContent::new(description, ContentSource::YouTubeMeta))
            .ok_or_else(|| MiningError::NotFound("No og:description meta tag".to_string()))
    }
}
