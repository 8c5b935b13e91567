//! Checks a recipe against the form rules and the canonical line formats.
//!
//! Extraction itself never calls this; it is for the editing side and the CLI,
//! which decide what to do with a report.

use crate::model::ParsedRecipe;
use crate::providers::CATEGORIES;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static STEP_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\. ").unwrap());

/// Field name → problem description.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: BTreeMap<&'static str, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }
}

pub fn validate_recipe(recipe: &ParsedRecipe) -> ValidationReport {
    let mut report = ValidationReport::default();

    let title = recipe.title.trim();
    if title.is_empty() {
        report.add("title", "Title is required");
    } else if title.chars().count() < 3 {
        report.add("title", "Title must be at least 3 characters");
    }

    let category = recipe.category.trim();
    if category.is_empty() {
        report.add("category", "Category is required");
    } else if !CATEGORIES.iter().any(|c| c.eq_ignore_ascii_case(category)) {
        report.add("category", format!("Unknown category '{category}'"));
    }

    if let Some(cuisine) = &recipe.cuisine {
        if cuisine.trim().chars().count() < 2 {
            report.add("cuisine", "Cuisine must be at least 2 characters");
        }
    }

    if recipe.prep_time_minutes.is_some_and(|m| m < 0) {
        report.add("prep_time_minutes", "Prep time must be a positive number");
    }
    if recipe.cook_time_minutes.is_some_and(|m| m < 0) {
        report.add("cook_time_minutes", "Cook time must be a positive number");
    }
    match (
        recipe.prep_time_minutes,
        recipe.cook_time_minutes,
        recipe.total_time_minutes,
    ) {
        (Some(prep), Some(cook), total) if total != prep.checked_add(cook) => {
            report.add("total_time_minutes", "Total time must equal prep plus cook time");
        }
        (None, _, Some(_)) | (_, None, Some(_)) => {
            report.add(
                "total_time_minutes",
                "Total time requires both prep and cook times",
            );
        }
        _ => {}
    }

    if recipe.ingredients.trim().is_empty() {
        report.add("ingredients", "Ingredients are required");
    } else if let Some(line) = recipe.ingredients.lines().find(|l| has_placeholder_quantity(l)) {
        report.add("ingredients", format!("Missing quantity written as a placeholder: '{}'", line.trim()));
    }

    if recipe.steps.trim().is_empty() {
        report.add("steps", "Instructions are required");
    } else if let Err(message) = check_step_numbering(&recipe.steps) {
        report.add("steps", message);
    }

    report
}

fn has_placeholder_quantity(line: &str) -> bool {
    line.rsplit_once('–')
        .map(|(_, quantity)| matches!(quantity.trim(), "null" | "undefined"))
        .unwrap_or(false)
}

fn check_step_numbering(steps: &str) -> Result<(), String> {
    for (index, line) in steps.lines().filter(|l| !l.trim().is_empty()).enumerate() {
        let expected = index + 1;
        let number = STEP_PREFIX_RE
            .captures(line.trim())
            .and_then(|caps| caps[1].parse::<usize>().ok());
        match number {
            Some(n) if n == expected => {}
            Some(n) => return Err(format!("Step {expected} is numbered {n}")),
            None => return Err(format!("Step {expected} is not numbered")),
        }
    }
    Ok(())
}
