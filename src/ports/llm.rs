/// LLM completion port trait
///
/// Defines the interface every vendor adapter implements.
/// Implementations: Anthropic messages API, OpenAI chat completions
/// (also used for OpenAI-compatible backends such as DeepSeek).
use crate::domain::models::{CompletionRequest, CompletionResult};
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for LLM completion services
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Send one prompt to the backend and return the first candidate's text
    ///
    /// Any transport, status, parse or empty-result failure is reported as
    /// `AppError::ProviderResponse`.
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Get the model this adapter sends requests for
    fn model(&self) -> &str;
}
