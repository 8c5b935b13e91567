use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Generative backend settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Page fetching and mining settings
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Upper bound for a single backend call, in seconds
    #[serde(default = "default_llm_timeout")]
    pub llm_timeout: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            fetch: FetchConfig::default(),
            llm_timeout: default_llm_timeout(),
        }
    }
}

/// Configuration for the generative text backend
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Provider name ("google", "openai" or "anthropic")
    #[serde(default = "default_provider")]
    pub name: String,
    /// Model identifier; each provider has its own default
    pub model: Option<String>,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: default_provider(),
            model: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

/// Configuration for outbound page fetches
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// Hard timeout for each page fetch, in seconds
    #[serde(default = "default_fetch_timeout")]
    pub timeout: u64,
    /// Visible page text is cut to this many characters
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
    /// Origin used to build watch-page URLs
    #[serde(default = "default_youtube_base_url")]
    pub youtube_base_url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: default_fetch_timeout(),
            max_text_chars: default_max_text_chars(),
            youtube_base_url: default_youtube_base_url(),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_EXTRACT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_EXTRACT__PROVIDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout)
    }
}

// Default value functions
fn default_provider() -> String {
    "google".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_max_text_chars() -> usize {
    40_000
}

fn default_youtube_base_url() -> String {
    "https://www.youtube.com".to_string()
}

fn default_llm_timeout() -> u64 {
    60
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the precedence rules.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from("config")
}

fn load_config_from(file_name: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file_name).required(false))
        // Use double underscore for nested: RECIPE_EXTRACT__FETCH__TIMEOUT
        .add_source(
            Environment::with_prefix("RECIPE_EXTRACT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_provider(), "google");
        assert_eq!(default_fetch_timeout(), 10);
        assert_eq!(default_max_text_chars(), 40_000);
        assert_eq!(default_llm_timeout(), 60);
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.provider.name, "google");
        assert!(config.provider.model.is_none());
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.fetch.timeout(), Duration::from_secs(10));
        assert_eq!(config.fetch.youtube_base_url, "https://www.youtube.com");
        assert_eq!(config.llm_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let settings = Config::builder()
            .add_source(config::File::from_str(
                r#"
                llm_timeout = 30

                [provider]
                name = "openai"
                model = "gpt-4o"

                [fetch]
                max_text_chars = 1000
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: AppConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.llm_timeout(), Duration::from_secs(30));
        assert_eq!(config.provider.name, "openai");
        assert_eq!(config.provider.model.as_deref(), Some("gpt-4o"));
        assert_eq!(config.provider.max_tokens, 4096);
        assert_eq!(config.fetch.max_text_chars, 1000);
        assert_eq!(config.fetch.timeout, 10);
    }

    #[test]
    fn test_load_config_without_file() {
        let config = load_config_from("recipe-extract-missing-config").unwrap();
        assert_eq!(config.provider.name, "google");
        assert_eq!(config.provider.temperature, 0.2);
        assert_eq!(config.provider.max_tokens, 4096);
        assert_eq!(config.fetch.timeout(), Duration::from_secs(10));
        assert_eq!(config.fetch.max_text_chars, 40_000);
        assert_eq!(config.llm_timeout(), Duration::from_secs(60));
    }
}
