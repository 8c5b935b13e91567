use std::time::Duration;

use log::{debug, info};

use crate::classifier::source_url;
use crate::config::AppConfig;
use crate::pipelines::ContentNormalizer;
use crate::providers::{build_extraction_prompt, ExtractionClient, LlmProvider, ProviderFactory};
use crate::response::parse_response;
use crate::url_to_text::PageMiner;
use crate::{ExtractError, ParsedRecipe};

/// A recipe together with the URL it was extracted from, if any.
#[derive(Debug, Clone)]
pub struct ExtractedRecipe {
    pub recipe: ParsedRecipe,
    pub source_url: Option<String>,
}

/// The full extraction pipeline: normalize → prompt → backend → parse.
///
/// Holds no per-request state; one instance can serve any number of
/// sequential or concurrent requests.
pub struct RecipeExtractor {
    normalizer: ContentNormalizer,
    client: ExtractionClient,
}

impl RecipeExtractor {
    /// Creates a new builder for configuring an extractor
    ///
    /// # Example
    /// ```
    /// use recipe_extract::RecipeExtractor;
    ///
    /// let builder = RecipeExtractor::builder()
    ///     .provider("openai")
    ///     .model("gpt-4o");
    /// ```
    pub fn builder() -> RecipeExtractorBuilder {
        RecipeExtractorBuilder::default()
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ExtractError> {
        Self::builder().config(config.clone()).build()
    }

    pub fn new(normalizer: ContentNormalizer, client: ExtractionClient) -> Self {
        Self { normalizer, client }
    }

    /// Content that would be embedded in the prompt for `input`.
    pub async fn normalize(&self, input: &str) -> Result<String, ExtractError> {
        let input = validate_input(input)?;
        Ok(self.normalizer.normalize(input).await)
    }

    /// The exact prompt that would be sent to the backend for `input`.
    pub async fn prompt(&self, input: &str) -> Result<String, ExtractError> {
        Ok(build_extraction_prompt(&self.normalize(input).await?))
    }

    /// Extract a recipe from a URL, YouTube link or pasted text.
    pub async fn extract(&self, input: &str) -> Result<ParsedRecipe, ExtractError> {
        let input = validate_input(input)?;

        let mined = self.normalizer.mine(input).await;
        info!("Prompt content source: {}", mined.source);

        let prompt = build_extraction_prompt(&mined.text);
        debug!("Built prompt, length: {}", prompt.len());

        let raw_text = self.client.extract(&prompt).await?;
        parse_response(&raw_text)
    }

    /// Like [`extract`](Self::extract), also reporting the source URL.
    pub async fn extract_with_source(&self, input: &str) -> Result<ExtractedRecipe, ExtractError> {
        let recipe = self.extract(input).await?;
        Ok(ExtractedRecipe {
            recipe,
            source_url: source_url(input).map(str::to_string),
        })
    }
}

fn validate_input(input: &str) -> Result<&str, ExtractError> {
    if input.trim().is_empty() {
        return Err(ExtractError::InvalidInput(
            "Please provide a URL or recipe text".to_string(),
        ));
    }
    Ok(input)
}

/// Builder for configuring a [`RecipeExtractor`]
#[derive(Default)]
pub struct RecipeExtractorBuilder {
    config: AppConfig,
    llm: Option<Box<dyn LlmProvider>>,
    youtube_miner: Option<Box<dyn PageMiner>>,
    page_miner: Option<Box<dyn PageMiner>>,
}

impl RecipeExtractorBuilder {
    /// Start from a loaded configuration instead of the defaults
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the provider by name ("google", "openai", "anthropic")
    pub fn provider(mut self, name: impl Into<String>) -> Self {
        self.config.provider.name = name.into();
        self
    }

    /// Set the model to use
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.provider.model = Some(model.into());
        self
    }

    /// Set the API key, overriding config and environment
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.provider.api_key = Some(key.into());
        self
    }

    /// Set the timeout for each page fetch
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.config.fetch.timeout = timeout.as_secs().max(1);
        self
    }

    /// Set the upper bound for the backend call
    pub fn llm_timeout(mut self, timeout: Duration) -> Self {
        self.config.llm_timeout = timeout.as_secs().max(1);
        self
    }

    /// Use a ready-made backend instead of building one from config
    pub fn llm_provider(mut self, provider: Box<dyn LlmProvider>) -> Self {
        self.llm = Some(provider);
        self
    }

    /// Replace the YouTube and generic page miners
    pub fn miners(mut self, youtube: Box<dyn PageMiner>, page: Box<dyn PageMiner>) -> Self {
        self.youtube_miner = Some(youtube);
        self.page_miner = Some(page);
        self
    }

    pub fn build(self) -> Result<RecipeExtractor, ExtractError> {
        let provider = match self.llm {
            Some(provider) => provider,
            None => ProviderFactory::create(&self.config.provider)?,
        };
        let client = ExtractionClient::new(provider, self.config.llm_timeout());

        let normalizer = match (self.youtube_miner, self.page_miner) {
            (Some(youtube), Some(page)) => ContentNormalizer::with_miners(youtube, page),
            _ => ContentNormalizer::new(&self.config.fetch),
        };

        Ok(RecipeExtractor::new(normalizer, client))
    }
}
