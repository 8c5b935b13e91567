use crate::config::ProviderConfig;
use crate::error::ExtractError;
use crate::providers::{AnthropicProvider, GoogleProvider, LlmProvider, OpenAIProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(config: &ProviderConfig) -> Result<Box<dyn LlmProvider>, ExtractError> {
        match config.name.as_str() {
            "google" | "gemini" => Ok(Box::new(GoogleProvider::new(config)?)),
            "openai" => Ok(Box::new(OpenAIProvider::new(config)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config)?)),
            other => Err(ExtractError::BackendConfiguration(format!(
                "Unknown provider: {}",
                other
            ))),
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["google", "openai", "anthropic"]
    }
}
