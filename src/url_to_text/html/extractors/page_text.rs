use super::{Extractor, ParsingContext};
use crate::error::MiningError;
use crate::model::{ContentSource, MinedContent};
use scraper::Html;

/// Last-resort strategy: the page's visible text. Never misses.
pub struct PageTextExtractor {
    pub max_chars: usize,
}

impl Extractor for PageTextExtractor {
    fn name(&self) -> &'static str {
        "page_text"
    }

    fn extract(&self, context: &ParsingContext) -> Result<MinedContent, MiningError> {
        let text = visible_text(&context.document);
        Ok(MinedContent::new(
            truncate_chars(&text, self.max_chars),
            ContentSource::HtmlText,
        ))
    }
}

/// All text outside `<script>` and `<style>`, with whitespace runs collapsed
/// to single spaces.
pub fn visible_text(document: &Html) -> String {
    let mut raw = String::new();

    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| matches!(el.name(), "script" | "style"))
        });
        if !hidden {
            raw.push_str(text);
            raw.push(' ');
        }
    }

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
