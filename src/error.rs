use thiserror::Error;

/// Errors surfaced to callers of the extraction pipeline
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input was empty or otherwise unusable, rejected before any processing
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Required backend credential or provider setting is missing
    #[error("Backend configuration error: {0}")]
    BackendConfiguration(String),

    /// The generative backend call failed or timed out
    #[error("Extraction failed: {0}")]
    ExtractionFailure(String),

    /// The backend answered with text that is not recoverable JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ExtractError {
    /// Message suitable for showing to an end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExtractError::InvalidInput(_) => "Invalid input. Please provide a URL or recipe text.",
            ExtractError::BackendConfiguration(_) | ExtractError::Config(_) => {
                "Server configuration error. Please contact support."
            }
            ExtractError::ExtractionFailure(_) => "Failed to parse recipe. Please try again.",
            ExtractError::MalformedResponse(_) => {
                "Failed to parse recipe. Please try again or enter recipe manually."
            }
        }
    }

    /// Whether the user can reasonably just try the same request again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ExtractError::ExtractionFailure(_) | ExtractError::MalformedResponse(_)
        )
    }
}

/// Soft failures raised while mining a page.
///
/// These never leave the miners: every variant is logged and replaced with
/// fallback content.
#[derive(Error, Debug)]
pub enum MiningError {
    #[error("Failed to fetch URL: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    NotFound(String),
}
