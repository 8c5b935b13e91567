use crate::error::MiningError;
use crate::model::MinedContent;
use log::debug;
use scraper::Html;

mod json_ld;
mod og_meta;
mod page_text;
mod yt_initial_data;

pub use json_ld::{find_recipe, JsonLdExtractor};
pub use og_meta::{meta_property, OgDescriptionExtractor};
pub use page_text::{visible_text, PageTextExtractor};
pub use yt_initial_data::{video_description, YtInitialDataExtractor};

pub struct ParsingContext {
    pub url: String,
    pub html: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(url: impl Into<String>, html: String) -> Self {
        let document = Html::parse_document(&html);
        Self {
            url: url.into(),
            html,
            document,
        }
    }
}

/// One mining strategy. A miss is an `Err`, never a panic.
pub trait Extractor {
    fn name(&self) -> &'static str;
    fn extract(&self, context: &ParsingContext) -> Result<MinedContent, MiningError>;
}

/// Run strategies in order and return the first hit.
pub fn first_success(
    extractors: &[&dyn Extractor],
    context: &ParsingContext,
) -> Option<MinedContent> {
    for extractor in extractors {
        match extractor.extract(context) {
            Ok(content) => {
                debug!(
                    "{} extractor produced {} chars for {}",
                    extractor.name(),
                    content.text.len(),
                    context.url
                );
                return Some(content);
            }
            Err(e) => debug!("{} extractor missed: {}", extractor.name(), e),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentSource;

    struct Miss;
    struct Hit(&'static str);

    impl Extractor for Miss {
        fn name(&self) -> &'static str {
            "miss"
        }
        fn extract(&self, _context: &ParsingContext) -> Result<MinedContent, MiningError> {
            Err(MiningError::NotFound("nothing here".to_string()))
        }
    }

    impl Extractor for Hit {
        fn name(&self) -> &'static str {
            "hit"
        }
        fn extract(&self, _context: &ParsingContext) -> Result<MinedContent, MiningError> {
            Ok(MinedContent::new(self.0, ContentSource::HtmlText))
        }
    }

    #[test]
    fn test_first_success_order() {
        let context = ParsingContext::new("http://example.com", String::new());

        let found = first_success(&[&Miss, &Hit("first"), &Hit("second")], &context);
        assert_eq!(found.unwrap().text, "first");

        assert!(first_success(&[&Miss, &Miss], &context).is_none());
        assert!(first_success(&[], &context).is_none());
    }
}
