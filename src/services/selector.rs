//! Provider selection
//!
//! Maps a model identifier to a complete `ProviderConfig`. Resolution is
//! redone on every call: the credential is read from the injected source
//! each time and nothing is cached between requests.

use crate::config::GatewayConfig;
use crate::domain::models::{ProviderConfig, ProviderKind};
use crate::error::{ConfigError, Result};
use crate::utils::credentials::CredentialSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProviderSelector {
    config: GatewayConfig,
    credentials: Arc<dyn CredentialSource>,
}

impl ProviderSelector {
    pub fn new(config: GatewayConfig, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            config,
            credentials,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Resolve `model` to its backend family, endpoint and credential
    ///
    /// Fails with `ConfigError` for an unrecognized model or an absent/empty
    /// credential, before any network request is attempted.
    pub fn resolve(&self, model: &str) -> Result<ProviderConfig> {
        let kind = ProviderKind::from_model(model)
            .ok_or_else(|| ConfigError::UnsupportedModel(model.to_string()))?;
        let endpoint = self.config.endpoint(kind);

        let api_key = match self.credentials.get_credential(&endpoint.credential_var) {
            None => return Err(ConfigError::MissingCredential(endpoint.credential_var.clone()).into()),
            Some(key) if key.is_empty() => {
                return Err(ConfigError::EmptyCredential(endpoint.credential_var.clone()).into())
            }
            Some(key) => key,
        };

        log::info!(
            "Resolved model {} to {} at {} (credential from {})",
            model,
            kind,
            endpoint.base_url,
            endpoint.credential_var
        );

        Ok(ProviderConfig {
            kind,
            model: model.to_string(),
            api_key,
            base_url: endpoint.base_url.clone(),
            timeout_secs: self.config.timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::services::llm::create_service;
    use crate::config::{ANTHROPIC_API_BASE, DEEPSEEK_API_BASE, OPENAI_API_BASE};
    use crate::domain::models::{RequestShape, SUPPORTED_MODELS};
    use crate::error::AppError;
    use crate::utils::credentials::StaticCredentials;

    fn all_keys() -> StaticCredentials {
        StaticCredentials::new()
            .with("ANTHROPIC_API_KEY", "ak")
            .with("OPENAI_API_KEY", "ok")
            .with("DEEPSEEK_API_KEY", "dk")
    }

    fn selector(credentials: StaticCredentials) -> ProviderSelector {
        ProviderSelector::new(GatewayConfig::default(), Arc::new(credentials))
    }

    #[test]
    fn test_resolve_supported_models() {
        let selector = selector(all_keys());

        let claude = selector.resolve("claude-3-5-sonnet-20241022").unwrap();
        assert_eq!(claude.kind, ProviderKind::Anthropic);
        assert_eq!(claude.base_url, ANTHROPIC_API_BASE);
        assert_eq!(claude.api_key, "ak");
        assert_eq!(claude.request_shape(), RequestShape::SystemField);

        let gpt = selector.resolve("gpt-4o").unwrap();
        assert_eq!(gpt.kind, ProviderKind::OpenAi);
        assert_eq!(gpt.base_url, OPENAI_API_BASE);
        assert_eq!(gpt.api_key, "ok");
        assert_eq!(gpt.request_shape(), RequestShape::ChatMessages);

        let deepseek = selector.resolve("deepseek-chat").unwrap();
        assert_eq!(deepseek.kind, ProviderKind::DeepSeek);
        assert_eq!(deepseek.base_url, DEEPSEEK_API_BASE);
        assert_eq!(deepseek.api_key, "dk");
        assert_eq!(deepseek.request_shape(), RequestShape::ChatMessages);

        for model in SUPPORTED_MODELS {
            assert!(create_service(selector.resolve(model).unwrap()).is_ok());
        }
    }

    #[test]
    fn test_resolve_rejects_unknown_models() {
        let selector = selector(all_keys());
        for model in ["", "gpt-4", "gpt-4o-mini", "llama-2-7b-chat", "mistral"] {
            match selector.resolve(model) {
                Err(AppError::Config(ConfigError::UnsupportedModel(name))) => {
                    assert_eq!(name, model)
                }
                other => panic!("expected unsupported model for {:?}, got {:?}", model, other),
            }
        }
    }

    #[test]
    fn test_missing_and_empty_credentials() {
        let selector = selector(StaticCredentials::new().with("OPENAI_API_KEY", ""));

        assert!(matches!(
            selector.resolve("deepseek-chat"),
            Err(AppError::Config(ConfigError::MissingCredential(ref var))) if var == "DEEPSEEK_API_KEY"
        ));
        assert!(matches!(
            selector.resolve("gpt-4o"),
            Err(AppError::Config(ConfigError::EmptyCredential(ref var))) if var == "OPENAI_API_KEY"
        ));
    }

    #[test]
    fn test_credentials_are_reread_on_every_resolve() {
        let credentials = StaticCredentials::new().with("ANTHROPIC_API_KEY", "first");
        let selector = selector(credentials.clone());
        assert_eq!(
            selector.resolve("claude-3-5-sonnet-20241022").unwrap().api_key,
            "first"
        );

        credentials.set("ANTHROPIC_API_KEY", "rotated");
        assert_eq!(
            selector.resolve("claude-3-5-sonnet-20241022").unwrap().api_key,
            "rotated"
        );
    }

    #[test]
    fn test_base_url_override() {
        let config = GatewayConfig::default().with_base_url(ProviderKind::DeepSeek, "http://127.0.0.1:1/");
        let selector = ProviderSelector::new(config, Arc::new(all_keys()));
        assert_eq!(
            selector.resolve("deepseek-chat").unwrap().base_url,
            "http://127.0.0.1:1"
        );
    }
}
