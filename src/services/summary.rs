//! Summary service
//!
//! Entry point for callers: resolves the model to an adapter, applies the
//! max-token policy, and runs the summarizer. Each call builds its own
//! provider config and adapter; concurrent calls share no mutable state.

use crate::adapters::services::llm::create_service;
use crate::config::GatewayConfig;
use crate::domain::models::{ModelId, SummaryRequest};
use crate::error::Result;
use crate::services::selector::ProviderSelector;
use crate::services::summarizer::MeetingSummarizer;
use crate::utils::credentials::{CredentialSource, EnvCredentials};
use std::sync::Arc;

#[derive(Clone)]
pub struct SummaryService {
    selector: ProviderSelector,
}

impl SummaryService {
    pub fn new(config: GatewayConfig, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            selector: ProviderSelector::new(config, credentials),
        }
    }

    /// Service reading credentials and `*_BASE_URL` overrides from the process environment
    pub fn from_env() -> Self {
        let env = EnvCredentials::new();
        let config = GatewayConfig::default().with_env_overrides(&env);
        Self::new(config, Arc::new(env))
    }

    pub fn selector(&self) -> &ProviderSelector {
        &self.selector
    }

    /// Summarize a transcript with the given model
    ///
    /// Configuration problems (unknown model, missing credential, zero
    /// `max_tokens`) are returned as-is before any request is sent. Failures
    /// during generation come back as `AppError::SummaryGeneration`.
    pub async fn summarize(
        &self,
        transcript: &str,
        context: &str,
        instructions: Option<&str>,
        model: &ModelId,
        max_tokens: Option<u32>,
    ) -> Result<String> {
        log::info!(
            "Summarizing transcript ({} chars, {} chars of context) with model {}",
            transcript.len(),
            context.len(),
            model
        );

        let provider = self.selector.resolve(model.as_str())?;
        let max_tokens = self
            .selector
            .config()
            .token_policy
            .effective(provider.kind, max_tokens)?;
        let llm = create_service(provider)?;

        let summary = MeetingSummarizer::new(Arc::from(llm))
            .summarize(transcript, Some(context), instructions, max_tokens)
            .await?;

        log::info!("Summary generated successfully ({} chars)", summary.len());
        Ok(summary)
    }

    pub async fn summarize_request(&self, request: &SummaryRequest) -> Result<String> {
        self.summarize(
            &request.transcript,
            request.reference_context.as_deref().unwrap_or(""),
            request.instructions.as_deref(),
            &request.model,
            request.max_tokens,
        )
        .await
    }
}
