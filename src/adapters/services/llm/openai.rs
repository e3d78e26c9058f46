//! OpenAI chat completions adapter
//!
//! Implements the CompletionPort for OpenAI's chat completions API. The same
//! adapter serves OpenAI-compatible backends (DeepSeek) through a different
//! base URL and provider name.

use crate::domain::models::{CompletionRequest, CompletionResult, ProviderConfig, ProviderKind};
use crate::error::{AppError, Result};
use crate::ports::llm::CompletionPort;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-style chat service implementation
pub struct OpenAIService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    provider: ProviderKind,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAIService {
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
            provider: config.kind,
        })
    }

    /// Optional system turn first, then the single user turn
    fn build_messages(request: &CompletionRequest) -> Vec<ChatMessage<'_>> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system_prompt.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &request.user_prompt,
        });
        messages
    }
}

#[async_trait]
impl CompletionPort for OpenAIService {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: Self::build_messages(request),
            max_tokens: request.max_tokens,
        };

        log::info!(
            "Calling {} chat completion with model: {} (max_tokens: {})",
            self.provider,
            self.model,
            request.max_tokens
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                AppError::ProviderResponse(format!("Chat completion request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ProviderResponse(format!(
                "Chat completion failed ({}): {}",
                status, error_text
            )));
        }

        let completion_response: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::ProviderResponse(format!("Failed to parse completion response: {}", e))
        })?;

        let content = completion_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::ProviderResponse("No completion choices returned".to_string())
            })?
            .message
            .content
            .ok_or_else(|| {
                AppError::ProviderResponse("Completion choice has no content".to_string())
            })?;

        log::info!(
            "{} completion successful, generated {} characters",
            self.provider,
            content.len()
        );

        Ok(CompletionResult { text: content })
    }

    fn provider_name(&self) -> &str {
        match self.provider {
            ProviderKind::DeepSeek => "deepseek",
            _ => "openai",
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}
