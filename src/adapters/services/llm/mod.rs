//! LLM service adapters
//!
//! Implementations of the CompletionPort trait for each backend family:
//! - Anthropic (Claude) via the messages API
//! - OpenAI (GPT-4o) via chat completions
//! - DeepSeek via the OpenAI-compatible chat completions API

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicService;
pub use openai::OpenAIService;

use crate::domain::models::{ProviderConfig, RequestShape};
use crate::error::Result;
use crate::ports::llm::CompletionPort;

/// Build the adapter for a resolved config
///
/// Either returns a fully usable service or fails; there is no half-built state.
pub fn create_service(config: ProviderConfig) -> Result<Box<dyn CompletionPort>> {
    log::debug!("Creating {} service for model {}", config.kind, config.model);
    match config.request_shape() {
        RequestShape::SystemField => Ok(Box::new(AnthropicService::from_config(config)?)),
        RequestShape::ChatMessages => Ok(Box::new(OpenAIService::from_config(config)?)),
    }
}
