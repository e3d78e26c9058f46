//! Anthropic LLM service adapter
//!
//! Implements the CompletionPort for Anthropic's messages API (Claude models).
//! The system prompt travels as the top-level `system` field, never as a turn.

use crate::domain::models::{CompletionRequest, CompletionResult, ProviderConfig};
use crate::error::{AppError, Result};
use crate::ports::llm::CompletionPort;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Anthropic service implementation
pub struct AnthropicService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicService {
    /// Create a service from a resolved provider config
    pub fn from_config(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
        })
    }

    fn build_request<'a>(&'a self, request: &'a CompletionRequest) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.model,
            system: request.system_prompt.as_deref(),
            messages: vec![Message {
                role: "user",
                content: &request.user_prompt,
            }],
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionPort for AnthropicService {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult> {
        let request_body = self.build_request(request);

        log::info!(
            "Calling Anthropic messages API with model: {} (max_tokens: {})",
            self.model,
            request.max_tokens
        );

        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::ProviderResponse(format!("Messages request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ProviderResponse(format!(
                "Messages request failed ({}): {}",
                status, error_text
            )));
        }

        let messages_response: MessagesResponse = response.json().await.map_err(|e| {
            AppError::ProviderResponse(format!("Failed to parse messages response: {}", e))
        })?;

        let content = messages_response
            .content
            .into_iter()
            .find(|block| block.block_type == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| AppError::ProviderResponse("No content blocks returned".to_string()))?;

        log::info!(
            "Anthropic completion successful, generated {} characters",
            content.len()
        );

        Ok(CompletionResult { text: content })
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
