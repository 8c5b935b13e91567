mod anthropic;
mod client;
mod factory;
mod google;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use client::ExtractionClient;
pub use factory::ProviderFactory;
pub use google::GoogleProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_extraction_prompt, CATEGORIES, RECIPE_EXTRACTION_PROMPT};

use crate::config::ProviderConfig;
use crate::error::ExtractError;
use async_trait::async_trait;
use std::error::Error;

/// A generative text backend: prompt in, text out.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Send one prompt and return the raw completion text
    async fn complete(&self, prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>>;
}

/// Take the API key from config first, then from the first set env var.
fn resolve_api_key(config: &ProviderConfig, env_vars: &[&str]) -> Result<String, ExtractError> {
    config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| env_vars.iter().find_map(|var| std::env::var(var).ok()))
        .ok_or_else(|| {
            ExtractError::BackendConfiguration(format!(
                "{} not found in config or environment",
                env_vars.join(" / ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_key_prefers_config() {
        let config = ProviderConfig {
            api_key: Some("from-config".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_api_key(&config, &["RECIPE_EXTRACT_TEST_UNSET_KEY"]).unwrap(),
            "from-config"
        );
    }

    #[test]
    fn test_resolve_api_key_missing() {
        let config = ProviderConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        let err = resolve_api_key(&config, &["RECIPE_EXTRACT_TEST_UNSET_KEY"]).unwrap_err();
        assert!(matches!(err, ExtractError::BackendConfiguration(_)));
        assert!(err.to_string().contains("RECIPE_EXTRACT_TEST_UNSET_KEY"));
    }
}
