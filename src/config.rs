//! Gateway configuration
//!
//! Endpoints, credential variable names, transport timeout and the
//! max-token policy per backend family. Loaded from defaults, an optional
//! JSON file, and `*_BASE_URL` environment overrides.

use crate::domain::models::ProviderKind;
use crate::error::{AppError, Result};
use crate::utils::credentials::CredentialSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEEPSEEK_API_BASE: &str = "https://api.deepseek.com";

pub const DEFAULT_MAX_TOKENS: u32 = 4000;
pub const DEEPSEEK_MAX_TOKENS: u32 = 8192;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Where one backend family lives and which variable holds its key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderEndpoint {
    pub base_url: String,
    pub credential_var: String,
    /// Variable that, when set, replaces `base_url`
    pub base_url_var: String,
}

impl ProviderEndpoint {
    fn new(base_url: &str, credential_var: &str, base_url_var: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            credential_var: credential_var.to_string(),
            base_url_var: base_url_var.to_string(),
        }
    }
}

/// Response token cap per backend family
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TokenPolicy {
    pub default_max_tokens: u32,
    pub overrides: HashMap<ProviderKind, u32>,
}

impl Default for TokenPolicy {
    fn default() -> Self {
        Self {
            default_max_tokens: DEFAULT_MAX_TOKENS,
            overrides: HashMap::from([(ProviderKind::DeepSeek, DEEPSEEK_MAX_TOKENS)]),
        }
    }
}

impl TokenPolicy {
    pub fn max_tokens_for(&self, kind: ProviderKind) -> u32 {
        self.overrides
            .get(&kind)
            .copied()
            .unwrap_or(self.default_max_tokens)
    }

    /// Caller override wins; zero is rejected
    pub fn effective(&self, kind: ProviderKind, requested: Option<u32>) -> Result<u32> {
        match requested {
            Some(0) => Err(AppError::InvalidInput(
                "max_tokens must be greater than zero".to_string(),
            )),
            Some(max_tokens) => Ok(max_tokens),
            None => Ok(self.max_tokens_for(kind)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GatewayConfig {
    pub anthropic: ProviderEndpoint,
    pub openai: ProviderEndpoint,
    pub deepseek: ProviderEndpoint,
    pub timeout_secs: u64,
    pub token_policy: TokenPolicy,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            anthropic: ProviderEndpoint::new(
                ANTHROPIC_API_BASE,
                "ANTHROPIC_API_KEY",
                "ANTHROPIC_BASE_URL",
            ),
            openai: ProviderEndpoint::new(OPENAI_API_BASE, "OPENAI_API_KEY", "OPENAI_BASE_URL"),
            deepseek: ProviderEndpoint::new(
                DEEPSEEK_API_BASE,
                "DEEPSEEK_API_KEY",
                "DEEPSEEK_BASE_URL",
            ),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token_policy: TokenPolicy::default(),
        }
    }
}

impl GatewayConfig {
    /// Load a JSON config file; missing fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        log::info!("Loaded gateway config from {}", path.display());
        Ok(config)
    }

    /// Apply `*_BASE_URL` overrides found in `env`
    pub fn with_env_overrides(mut self, env: &dyn CredentialSource) -> Self {
        for endpoint in [&mut self.anthropic, &mut self.openai, &mut self.deepseek] {
            if let Some(url) = env
                .get_credential(&endpoint.base_url_var)
                .filter(|url| !url.is_empty())
            {
                log::debug!("Overriding base URL from {}", endpoint.base_url_var);
                endpoint.base_url = url;
            }
        }
        self
    }

    pub fn endpoint(&self, kind: ProviderKind) -> &ProviderEndpoint {
        match kind {
            ProviderKind::Anthropic => &self.anthropic,
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::DeepSeek => &self.deepseek,
        }
    }

    pub fn endpoint_mut(&mut self, kind: ProviderKind) -> &mut ProviderEndpoint {
        match kind {
            ProviderKind::Anthropic => &mut self.anthropic,
            ProviderKind::OpenAi => &mut self.openai,
            ProviderKind::DeepSeek => &mut self.deepseek,
        }
    }

    /// Point one family at `base_url`, e.g. a local mock server
    pub fn with_base_url(mut self, kind: ProviderKind, base_url: &str) -> Self {
        self.endpoint_mut(kind).base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}
