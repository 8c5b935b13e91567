use serde::{Deserialize, Serialize};
use std::fmt;

/// How a piece of raw input should be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentKind {
    /// Freeform text pasted by the user
    PlainText,
    /// A YouTube watch, short-link, shorts or embed URL
    YouTubeUrl { video_id: String },
    /// Any other http(s) URL
    GenericUrl { url: String },
}

/// Where mined content came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentSource {
    #[serde(rename = "jsonld")]
    JsonLd,
    #[serde(rename = "html-text")]
    HtmlText,
    #[serde(rename = "youtube-description")]
    YouTubeDescription,
    #[serde(rename = "youtube-meta")]
    YouTubeMeta,
    #[serde(rename = "raw-url")]
    RawUrl,
    #[serde(rename = "plain-text")]
    PlainText,
}

impl ContentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSource::JsonLd => "jsonld",
            ContentSource::HtmlText => "html-text",
            ContentSource::YouTubeDescription => "youtube-description",
            ContentSource::YouTubeMeta => "youtube-meta",
            ContentSource::RawUrl => "raw-url",
            ContentSource::PlainText => "plain-text",
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text gathered for the prompt, tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinedContent {
    pub text: String,
    pub source: ContentSource,
}

impl MinedContent {
    pub fn new(text: impl Into<String>, source: ContentSource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }

    /// Mining gave up; the caller should fall back to the input it already has.
    pub fn is_fallback(&self) -> bool {
        self.source == ContentSource::RawUrl
    }
}

/// The canonical recipe record produced by every extraction path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    pub title: String,
    pub category: String,
    pub cuisine: Option<String>,
    pub servings: Option<String>,
    pub prep_time_minutes: Option<i64>,
    pub cook_time_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_minutes: Option<i64>,
    /// Newline separated `Ingredient – quantity` lines
    pub ingredients: String,
    /// Newline separated `N. step` lines
    pub steps: String,
    pub notes: Option<String>,
}

impl ParsedRecipe {
    /// Render a plain-text view of the recipe.
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.title);
        output.push('\n');

        let mut facts = vec![format!("Category: {}", self.category)];
        if let Some(cuisine) = &self.cuisine {
            facts.push(format!("Cuisine: {cuisine}"));
        }
        if let Some(servings) = &self.servings {
            facts.push(format!("Servings: {servings}"));
        }
        if let Some(prep) = self.prep_time_minutes {
            facts.push(format!("Prep: {prep} min"));
        }
        if let Some(cook) = self.cook_time_minutes {
            facts.push(format!("Cook: {cook} min"));
        }
        if let Some(total) = self.total_time_minutes {
            facts.push(format!("Total: {total} min"));
        }
        output.push_str(&facts.join(" | "));

        output.push_str("\n\nIngredients:\n");
        output.push_str(&self.ingredients);
        output.push_str("\n\nSteps:\n");
        output.push_str(&self.steps);

        if let Some(notes) = &self.notes {
            output.push_str("\n\nNotes:\n");
            output.push_str(notes);
        }
        output
    }

    /// Copy of the recipe with ingredient and step lines re-formatted.
    pub fn reformatted(&self) -> Self {
        Self {
            ingredients: crate::formatting::format_ingredients(&self.ingredients),
            steps: crate::formatting::format_steps(&self.steps),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedRecipe {
        ParsedRecipe {
            title: "Pancakes".to_string(),
            category: "Breakfast".to_string(),
            cuisine: Some("American".to_string()),
            servings: Some("4 servings".to_string()),
            prep_time_minutes: Some(10),
            cook_time_minutes: Some(15),
            total_time_minutes: Some(25),
            ingredients: "Flour – 1 cup\nMilk – 1 cup".to_string(),
            steps: "1. Mix 1 cup flour and 1 cup milk\n2. Cook on a hot pan".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_content_source_serializes_to_tag() {
        assert_eq!(
            serde_json::to_string(&ContentSource::JsonLd).unwrap(),
            r#""jsonld""#
        );
        assert_eq!(ContentSource::YouTubeMeta.to_string(), "youtube-meta");
    }

    #[test]
    fn test_total_time_omitted_when_absent() {
        let mut recipe = sample();
        recipe.total_time_minutes = None;
        let json = serde_json::to_value(&recipe).unwrap();
        assert!(json.get("total_time_minutes").is_none());
        assert!(json.get("notes").unwrap().is_null());
    }

    #[test]
    fn test_to_text() {
        let text = sample().to_text();
        assert!(text.starts_with("Pancakes\n"));
        assert!(text.contains("Category: Breakfast | Cuisine: American"));
        assert!(text.contains("Total: 25 min"));
        assert!(text.contains("Steps:\n1. Mix"));
        assert!(!text.contains("Notes:"));
    }

    #[test]
    fn test_reformatted_renumbers_steps() {
        let mut recipe = sample();
        recipe.steps = "Mix\n\n3. Cook".to_string();
        recipe.ingredients = "Flour - 1 cup".to_string();

        let formatted = recipe.reformatted();
        assert_eq!(formatted.steps, "1. Mix\n2. Cook");
        assert_eq!(formatted.ingredients, "Flour – 1 cup");
        assert_eq!(formatted.title, recipe.title);
    }
}
