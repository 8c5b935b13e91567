//! Turns the backend's raw answer into a [`ParsedRecipe`].

use crate::error::ExtractError;
use crate::model::ParsedRecipe;
use log::{debug, error};
use serde_json::{Map, Value};

/// Parse raw model output. Fails with `MalformedResponse` when the text is
/// not a JSON object once code fences are removed.
pub fn parse_response(raw_text: &str) -> Result<ParsedRecipe, ExtractError> {
    let cleaned = strip_code_fences(raw_text);

    let value: Value = serde_json::from_str(cleaned).map_err(|e| {
        error!("Failed to parse AI response: {}", raw_text);
        ExtractError::MalformedResponse(e.to_string())
    })?;

    let Value::Object(fields) = value else {
        error!("AI response is not a JSON object: {}", raw_text);
        return Err(ExtractError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    };

    let mut recipe = ParsedRecipe {
        title: text_field(&fields, "title").unwrap_or_default(),
        category: text_field(&fields, "category").unwrap_or_default(),
        cuisine: text_field(&fields, "cuisine"),
        servings: text_field(&fields, "servings"),
        prep_time_minutes: minutes_field(&fields, "prep_time_minutes"),
        cook_time_minutes: minutes_field(&fields, "cook_time_minutes"),
        total_time_minutes: None,
        ingredients: lines_field(&fields, "ingredients"),
        steps: lines_field(&fields, "steps"),
        notes: text_field(&fields, "notes"),
    };

    recipe.total_time_minutes = match (recipe.prep_time_minutes, recipe.cook_time_minutes) {
        (Some(prep), Some(cook)) => {
            let total = prep.checked_add(cook);
            if total.is_none() {
                debug!("Prep plus cook time overflows, leaving total time empty");
            }
            total
        }
        _ => {
            if fields.get("total_time_minutes").is_some_and(|v| !v.is_null()) {
                debug!("Dropping model-supplied total time without both prep and cook times");
            }
            None
        }
    };

    Ok(recipe)
}

/// Remove a leading ```` ``` ```` / ```` ```json ```` line and a trailing
/// ```` ``` ````.
pub fn strip_code_fences(text: &str) -> &str {
    let mut cleaned = text.trim();

    if let Some(rest) = cleaned.strip_prefix("```") {
        let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
        cleaned = rest.trim_start();
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest.trim_end();
    }

    cleaned
}

/// Strings as-is, numbers as text; empty, `null` and `undefined` are absent.
fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    let text = match fields.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    match text.as_str() {
        "" | "null" | "undefined" => None,
        _ => Some(text),
    }
}

/// Newline-joined text; the model sometimes sends a list instead.
fn lines_field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

/// Whole minutes from an integer, a float or a string like "15 minutes".
fn minutes_field(fields: &Map<String, Value>, key: &str) -> Option<i64> {
    match fields.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(float_minutes)),
        Value::String(s) => {
            let digits: String = s
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

/// Rounded minutes, or `None` when the float does not fit in an `i64`.
fn float_minutes(value: f64) -> Option<i64> {
    let rounded = value.round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Some(rounded as i64)
    } else {
        None
    }
}
