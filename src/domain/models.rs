/// Domain models for the meeting summarizer
///
/// These models are vendor-agnostic and represent the core request/response entities.
use crate::error::{AppError, ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Model identifiers accepted at the boundary
pub const SUPPORTED_MODELS: [&str; 3] = ["claude-3-5-sonnet-20241022", "gpt-4o", "deepseek-chat"];

/// Model used when the caller does not name one
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// A caller-supplied model identifier that passed the allow-list check
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelId(String);

impl ModelId {
    /// Accepts only identifiers from [`SUPPORTED_MODELS`]
    pub fn parse(model: &str) -> std::result::Result<Self, ConfigError> {
        if SUPPORTED_MODELS.contains(&model) {
            Ok(Self(model.to_string()))
        } else {
            Err(ConfigError::UnsupportedModel(model.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self(DEFAULT_MODEL.to_string())
    }
}

impl TryFrom<String> for ModelId {
    type Error = ConfigError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ModelId> for String {
    fn from(model: ModelId) -> Self {
        model.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Backend family serving a model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Anthropic,
    OpenAi,
    DeepSeek,
}

/// How a backend expects the system prompt to be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestShape {
    /// System prompt is a top-level field, messages hold only the user turn
    SystemField,
    /// System prompt is the first turn of the message array
    ChatMessages,
}

impl ProviderKind {
    /// Matches a model identifier to its backend family, case-insensitively
    pub fn from_model(model: &str) -> Option<Self> {
        let lowered = model.to_lowercase();
        if lowered.contains("claude") {
            Some(ProviderKind::Anthropic)
        } else if lowered == "gpt-4o" {
            Some(ProviderKind::OpenAi)
        } else if lowered.contains("deepseek") {
            Some(ProviderKind::DeepSeek)
        } else {
            None
        }
    }

    pub fn request_shape(&self) -> RequestShape {
        match self {
            ProviderKind::Anthropic => RequestShape::SystemField,
            ProviderKind::OpenAi | ProviderKind::DeepSeek => RequestShape::ChatMessages,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Anthropic => write!(f, "anthropic"),
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::DeepSeek => write!(f, "deepseek"),
        }
    }
}

/// Everything needed to build one adapter for one request
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub model: String,
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ProviderConfig {
    pub fn request_shape(&self) -> RequestShape {
        self.kind.request_shape()
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// A normalized completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub system_prompt: Option<String>,
    pub user_prompt: String,
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Creates a request, rejecting an empty user prompt or a zero token cap
    pub fn new(system_prompt: Option<String>, user_prompt: String, max_tokens: u32) -> Result<Self> {
        if user_prompt.is_empty() {
            return Err(AppError::InvalidInput(
                "user prompt must not be empty".to_string(),
            ));
        }
        if max_tokens == 0 {
            return Err(AppError::InvalidInput(
                "max_tokens must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            system_prompt,
            user_prompt,
            max_tokens,
        })
    }
}

/// Text returned by a backend; vendor metadata is dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResult {
    pub text: String,
}

/// One summarization call as received from the outer surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub transcript: String,
    pub instructions: Option<String>,
    pub model: ModelId,
    pub reference_context: Option<String>,
    pub max_tokens: Option<u32>,
}

impl SummaryRequest {
    pub fn new(transcript: impl Into<String>, model: ModelId) -> Self {
        Self {
            transcript: transcript.into(),
            instructions: None,
            model,
            reference_context: None,
            max_tokens: None,
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.reference_context = Some(context.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}
