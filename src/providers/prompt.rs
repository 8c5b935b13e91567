/// The instruction template sent to the generative backend.
///
/// Loaded from `prompt.txt` at compile time. `{categories}` and `{content}`
/// are substituted by [`build_extraction_prompt`]. The JSON shape it asks for
/// must stay in sync with [`crate::response::parse_response`].
pub const RECIPE_EXTRACTION_PROMPT: &str = include_str!("prompt.txt");

/// The closed set of categories the model may choose from.
pub const CATEGORIES: [&str; 12] = [
    "Breakfast",
    "Lunch",
    "Dinner",
    "Dessert",
    "Snack",
    "Appetizer",
    "Main",
    "Side",
    "Cake",
    "Curry",
    "Pudding",
    "Other",
];

/// Render the prompt for `content`. Pure: the same content always gives the
/// same prompt.
pub fn build_extraction_prompt(content: &str) -> String {
    RECIPE_EXTRACTION_PROMPT
        .replace("{categories}", &CATEGORIES.join(", "))
        .replace("{content}", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_embedded() {
        assert!(RECIPE_EXTRACTION_PROMPT.contains("{content}"));
        assert!(RECIPE_EXTRACTION_PROMPT.contains("{categories}"));
        assert!(RECIPE_EXTRACTION_PROMPT.contains("no markdown, no extra text"));
    }

    #[test]
    fn test_prompt_names_every_response_field() {
        for field in [
            "title",
            "category",
            "cuisine",
            "servings",
            "prep_time_minutes",
            "cook_time_minutes",
            "ingredients",
            "steps",
            "notes",
        ] {
            assert!(
                RECIPE_EXTRACTION_PROMPT.contains(&format!("\"{field}\":")),
                "prompt is missing {field}"
            );
        }
    }

    #[test]
    fn test_build_embeds_content_verbatim() {
        let content = "Flour - 2 cups\nSugar - 1 tbsp\n1. Mix\n2. Bake";
        let prompt = build_extraction_prompt(content);

        assert!(prompt.contains(&format!("INPUT:\n{content}\n")));
        assert!(prompt.contains("Breakfast, Lunch, Dinner"));
        assert!(!prompt.contains("{categories}"));
        assert!(prompt.contains("Ingredient – quantity"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let content = "https://example.com/pie";
        assert_eq!(build_extraction_prompt(content), build_extraction_prompt(content));
    }

    #[test]
    fn test_placeholders_in_content_are_not_expanded() {
        let prompt = build_extraction_prompt("literal {categories} text");
        assert!(prompt.contains("literal {categories} text"));
    }
}
