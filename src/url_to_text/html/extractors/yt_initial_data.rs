use super::{Extractor, ParsingContext};
use crate::error::MiningError;
use crate::model::{ContentSource, MinedContent};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Deserializer, Value};

static YT_INITIAL_DATA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:var\s+ytInitialData|window\["ytInitialData"\])\s*=\s*"#).unwrap()
});

const RESULTS_POINTER: &str = "/contents/twoColumnWatchNextResults/results/results/contents";

/// Full video description from the page-data blob YouTube embeds in the
/// watch page.
pub struct YtInitialDataExtractor;

impl Extractor for YtInitialDataExtractor {
    fn name(&self) -> &'static str {
        "yt_initial_data"
    }

    fn extract(&self, context: &ParsingContext) -> Result<MinedContent, MiningError> {
        let data = parse_initial_data(&context.html).map_err(|e| {
            warn!("Failed to parse ytInitialData: {}", e);
            e
        })?;

        let description = video_description(&data)
            .filter(|description| !description.is_empty())
            .ok_or_else(|| {
                MiningError::NotFound("No description in ytInitialData".to_string())
            })?;

        info!(
            "Extracted YouTube description from ytInitialData, length: {}",
            description.len()
        );
        Ok(MinedContent::new(
            description,
            ContentSource::YouTubeDescription,
        ))
    }
}

/// Parse the first JSON value after the `ytInitialData =` assignment,
/// ignoring whatever script follows it.
fn parse_initial_data(html: &str) -> Result<Value, MiningError> {
    let assignment = YT_INITIAL_DATA_RE
        .find(html)
        .ok_or_else(|| MiningError::NotFound("No ytInitialData in page".to_string()))?;

    let mut values = Deserializer::from_str(&html[assignment.end()..]).into_iter::<Value>();
    match values.next() {
        Some(value) => Ok(value?),
        None => Err(MiningError::NotFound("Empty ytInitialData".to_string())),
    }
}

/// `attributedDescription.content` of the secondary-info renderer in the
/// watch-next results list.
pub fn video_description(data: &Value) -> Option<&str> {
    data.pointer(RESULTS_POINTER)?
        .as_array()?
        .iter()
        .find_map(|item| {
            item.pointer("/videoSecondaryInfoRenderer/attributedDescription/content")
                .and_then(Value::as_str)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn watch_page(blob: &str) -> String {
        format!(
            r#"<html><head><meta property="og:title" content="Dal"></head><body>
            <script nonce="x">var ytInitialData = {blob};var other = {{"a": 1}};</script>
            </body></html>"#
        )
    }

    fn initial_data(description: &str) -> String {
        json!({
            "contents": {
                "twoColumnWatchNextResults": {
                    "results": {
                        "results": {
                            "contents": [
                                {"videoPrimaryInfoRenderer": {"title": {}}},
                                {"videoSecondaryInfoRenderer": {
                                    "attributedDescription": {"content": description}
                                }}
                            ]
                        }
                    }
                }
            }
        })
        .to_string()
    }

    #[test]
    fn test_extracts_exact_description() {
        let description = "Ingredients:\n- 1 cup lentils};\n- 2 tsp salt\n\nMethod: boil.";
        let context = ParsingContext::new(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            watch_page(&initial_data(description)),
        );

        let mined = YtInitialDataExtractor.extract(&context).unwrap();
        assert_eq!(mined.text, description);
        assert_eq!(mined.source, ContentSource::YouTubeDescription);
    }

    #[test]
    fn test_window_assignment_form() {
        let html = format!(
            r#"<script>window["ytInitialData"] = {};</script>"#,
            initial_data("From window")
        );
        let data = parse_initial_data(&html).unwrap();
        assert_eq!(video_description(&data), Some("From window"));
    }

    #[test]
    fn test_missing_path_is_a_miss() {
        let context = ParsingContext::new(
            "https://youtu.be/dQw4w9WgXcQ",
            watch_page(r#"{"contents": {"singleColumnWatchNextResults": {}}}"#),
        );
        assert!(matches!(
            YtInitialDataExtractor.extract(&context),
            Err(MiningError::NotFound(_))
        ));
    }

    #[test]
    fn test_broken_blob_is_a_miss() {
        let context = ParsingContext::new(
            "https://youtu.be/dQw4w9WgXcQ",
            "<script>var ytInitialData = {\"contents\": [1, 2</script>".to_string(),
        );
        assert!(matches!(
            YtInitialDataExtractor.extract(&context),
            Err(MiningError::Json(_))
        ));
    }

    #[test]
    fn test_no_blob() {
        assert!(parse_initial_data("<html></html>").is_err());
    }
}
