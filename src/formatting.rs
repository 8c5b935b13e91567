//! Re-formatters for hand-edited or off-format ingredient and step text.

use once_cell::sync::Lazy;
use regex::Regex;

// An en or em dash anywhere, or a hyphen with whitespace on at least one side
static INGREDIENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s*(?:[–—]|\s-|-\s|-$)\s*(.*)$").unwrap());
static STEP_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\s*[.):](?:\s+|$)").unwrap());

/// Normalise every `name - quantity` line to `name – quantity`.
///
/// Lines without a separator (headers such as "Marination") are kept as-is;
/// blank lines are dropped.
pub fn format_ingredients(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match INGREDIENT_RE.captures(line) {
            Some(caps) => format!("{} – {}", caps[1].trim(), caps[2].trim()),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Number steps `1.`, `2.`, … in order, replacing any existing numbering.
pub fn format_steps(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| STEP_NUMBER_RE.replace(line, "").into_owned())
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, step)| format!("{}. {}", index + 1, step))
        .collect::<Vec<_>>()
        .join("\n")
}
