//! Decides whether raw input is pasted text, a YouTube video or some other web page.

use crate::model::ContentKind;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://\S+").unwrap());

static YOUTUBE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:youtube\.com/watch\?(?:[^#\s]*&)?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/shorts/)([A-Za-z0-9_-]{11})",
    )
    .unwrap()
});

/// Classify raw input. Pure string inspection, never fails.
pub fn classify(raw: &str) -> ContentKind {
    let trimmed = raw.trim();

    let kind = match URL_RE.find(trimmed) {
        None => ContentKind::PlainText,
        Some(url) => match YOUTUBE_RE.captures(url.as_str()) {
            Some(caps) => ContentKind::YouTubeUrl {
                video_id: caps[1].to_string(),
            },
            None => ContentKind::GenericUrl {
                url: url.as_str().to_string(),
            },
        },
    };

    debug!("Classified input as {:?}", kind);
    kind
}

/// The input itself when it is a URL, for storing alongside the recipe.
pub fn source_url(raw: &str) -> Option<&str> {
    URL_RE.find(raw.trim()).map(|url| url.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_id(raw: &str) -> Option<String> {
        match classify(raw) {
            ContentKind::YouTubeUrl { video_id } => Some(video_id),
            _ => None,
        }
    }

    #[test]
    fn test_youtube_url_shapes() {
        let id = "dQw4w9WgXcQ";
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?si=abc",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "  https://youtu.be/dQw4w9WgXcQ\n",
        ] {
            assert_eq!(video_id(url).as_deref(), Some(id), "{url}");
        }
    }

    #[test]
    fn test_generic_urls() {
        assert_eq!(
            classify("https://www.allrecipes.com/recipe/10813/best-chocolate-chip-cookies/"),
            ContentKind::GenericUrl {
                url: "https://www.allrecipes.com/recipe/10813/best-chocolate-chip-cookies/"
                    .to_string()
            }
        );
        assert_eq!(
            classify(" http://127.0.0.1:8080/recipe "),
            ContentKind::GenericUrl {
                url: "http://127.0.0.1:8080/recipe".to_string()
            }
        );
        // Channel pages carry no video id
        assert!(matches!(
            classify("https://www.youtube.com/@someone"),
            ContentKind::GenericUrl { .. }
        ));
        // Too short to be a video id
        assert!(matches!(
            classify("https://youtu.be/abc"),
            ContentKind::GenericUrl { .. }
        ));
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            classify("Flour - 2 cups\nSugar - 1 tbsp\n1. Mix\n2. Bake"),
            ContentKind::PlainText
        );
        assert_eq!(classify("www.example.com/recipe"), ContentKind::PlainText);
        assert_eq!(classify("ftp://example.com/recipe"), ContentKind::PlainText);
        assert_eq!(
            classify("See https://www.youtube.com/watch?v=dQw4w9WgXcQ for details"),
            ContentKind::PlainText
        );
        assert_eq!(classify(""), ContentKind::PlainText);
    }

    #[test]
    fn test_source_url() {
        assert_eq!(
            source_url(" https://example.com/pie \n"),
            Some("https://example.com/pie")
        );
        assert_eq!(source_url("2 eggs, 1 cup flour"), None);
    }
}
