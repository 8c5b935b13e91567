use super::LlmProvider;
use crate::error::ExtractError;
use log::{debug, error};
use std::time::Duration;
use tokio::time::timeout;

/// One bounded call to the generative backend. No retries.
pub struct ExtractionClient {
    provider: Box<dyn LlmProvider>,
    timeout: Duration,
}

impl ExtractionClient {
    pub fn new(provider: Box<dyn LlmProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Send `prompt` and return the raw completion. The call is dropped once
    /// the timeout elapses.
    pub async fn extract(&self, prompt: &str) -> Result<String, ExtractError> {
        debug!(
            "Sending {} char prompt to {}",
            prompt.len(),
            self.provider.provider_name()
        );

        match timeout(self.timeout, self.provider.complete(prompt)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => {
                error!("{} call failed: {}", self.provider.provider_name(), e);
                Err(ExtractError::ExtractionFailure(e.to_string()))
            }
            Err(_) => {
                error!(
                    "{} did not answer within {:?}",
                    self.provider.provider_name(),
                    self.timeout
                );
                Err(ExtractError::ExtractionFailure(format!(
                    "{} timed out after {:?}",
                    self.provider.provider_name(),
                    self.timeout
                )))
            }
        }
    }
}
