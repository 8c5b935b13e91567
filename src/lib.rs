//! Extract structured recipes from web pages, YouTube videos and pasted text.
//!
//! Input is classified, mined from the web when it is a URL, embedded in a
//! fixed instruction prompt, sent to a generative text backend, and the JSON
//! answer is parsed into a [`ParsedRecipe`].

pub mod builder;
pub mod classifier;
pub mod config;
pub mod error;
pub mod formatting;
pub mod model;
pub mod pipelines;
pub mod providers;
pub mod response;
pub mod url_to_text;
pub mod validation;

pub use builder::{ExtractedRecipe, RecipeExtractor, RecipeExtractorBuilder};
pub use config::AppConfig;
pub use error::ExtractError;
pub use model::{ContentKind, ContentSource, MinedContent, ParsedRecipe};

/// Extract a recipe using configuration from `config.toml` and the environment.
///
/// # Example
/// ```no_run
/// # async fn run() -> Result<(), recipe_extract::ExtractError> {
/// let recipe = recipe_extract::extract_recipe("https://example.com/banana-bread").await?;
/// println!("{}", recipe.title);
/// # Ok(())
/// # }
/// ```
pub async fn extract_recipe(input: &str) -> Result<ParsedRecipe, ExtractError> {
    let config = AppConfig::load()?;
    RecipeExtractor::from_config(&config)?.extract(input).await
}
