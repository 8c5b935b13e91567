use super::{Extractor, ParsingContext};
use crate::error::MiningError;
use crate::model::{ContentSource, MinedContent};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use scraper::Selector;
use serde_json::Value;

/// Nesting deeper than this is treated as a miss.
const MAX_DEPTH: usize = 32;

static JSON_LD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"script[type="application/ld+json"]"#).unwrap());

/// Finds a schema.org Recipe object in the page's JSON-LD blocks and hands it
/// on re-serialized, untouched otherwise.
pub struct JsonLdExtractor;

impl Extractor for JsonLdExtractor {
    fn name(&self) -> &'static str {
        "json_ld"
    }

    fn extract(&self, context: &ParsingContext) -> Result<MinedContent, MiningError> {
        let scripts: Vec<_> = context.document.select(&JSON_LD_SELECTOR).collect();
        debug!("JsonLdExtractor: Found {} JSON-LD script tags", scripts.len());

        for (index, script) in scripts.iter().enumerate() {
            let raw_json = script.text().collect::<String>();
            let json_ld = match parse_json_ld(&raw_json) {
                Ok(value) => value,
                Err(e) => {
                    warn!("JsonLdExtractor: Failed to parse JSON-LD block {}: {}", index, e);
                    continue;
                }
            };

            if let Some(recipe) = find_recipe(&json_ld) {
                info!("Found JSON-LD Recipe object in {}", context.url);
                return Ok(MinedContent::new(
                    serde_json::to_string(recipe)?,
                    ContentSource::JsonLd,
                ));
            }
            debug!("JsonLdExtractor: No Recipe object in block {}", index);
        }

        Err(MiningError::NotFound(
            "No Recipe object in any JSON-LD script".to_string(),
        ))
    }
}

fn parse_json_ld(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(raw.trim()).or_else(|e| {
        debug!("JsonLdExtractor: Retrying after sanitizing: {}", e);
        serde_json::from_str(&sanitize_json(raw.trim()))
    })
}

/// Locate the first Recipe-typed object: the value itself, an element of a
/// wrapping array, or an entry of an `@graph` container.
pub fn find_recipe(value: &Value) -> Option<&Value> {
    find_recipe_at(value, 0)
}

fn find_recipe_at(value: &Value, depth: usize) -> Option<&Value> {
    if depth > MAX_DEPTH {
        debug!("JsonLdExtractor: Giving up below depth {}", MAX_DEPTH);
        return None;
    }

    match value {
        Value::Array(items) => items
            .iter()
            .find_map(|item| find_recipe_at(item, depth + 1)),
        Value::Object(map) => {
            if is_recipe_type(value) {
                return Some(value);
            }
            map.get("@graph")
                .and_then(|graph| find_recipe_at(graph, depth + 1))
        }
        _ => None,
    }
}

fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(type_str)) => type_str.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| t.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

/// Repair the two mistakes sites make most: raw control characters inside
/// strings and trailing commas.
fn sanitize_json(json_str: &str) -> String {
    let mut cleaned = String::with_capacity(json_str.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in json_str.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            } else if c.is_control() {
                cleaned.push(' ');
                continue;
            }
            cleaned.push(c);
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                cleaned.push(c);
            }
            ']' | '}' => {
                let trimmed_len = cleaned.trim_end().len();
                if cleaned[..trimmed_len].ends_with(',') {
                    cleaned.truncate(trimmed_len - 1);
                }
                cleaned.push(c);
            }
            _ => cleaned.push(c),
        }
    }

    cleaned
}
