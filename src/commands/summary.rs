//! Summary commands
//!
//! Request/response handlers used by the CLI (or any outer transport):
//! - Generating a meeting summary from a transcript and reference documents
//! - Listing the supported models

use crate::domain::models::{ModelId, DEFAULT_MODEL, SUPPORTED_MODELS};
use crate::error::{AppError, Result};
use crate::AppState;
use serde::{Deserialize, Serialize};

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Request to summarize a meeting
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub transcript: String,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// Names of previously uploaded documents under the upload directory
    #[serde(default)]
    pub reference_docs: Option<Vec<String>>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

/// Response containing the generated summary
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Generate a meeting summary
pub async fn summarize_meeting(
    request: SummarizeRequest,
    state: &AppState,
) -> Result<SummarizeResponse> {
    log::info!("Received summarize request with model: {}", request.model);

    if request.transcript.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "transcript must not be empty".to_string(),
        ));
    }
    let model = ModelId::parse(&request.model)?;

    let context = match request.reference_docs.as_deref() {
        Some(docs) if !docs.is_empty() => {
            log::info!("Processing {} reference documents", docs.len());
            state.documents.process_documents(docs)
        }
        _ => String::new(),
    };

    let summary = state
        .summaries
        .summarize(
            &request.transcript,
            &context,
            request.instructions.as_deref(),
            &model,
            request.max_tokens,
        )
        .await?;

    Ok(SummarizeResponse { summary })
}

/// List all supported model identifiers
pub fn list_models() -> Vec<String> {
    SUPPORTED_MODELS.iter().map(|m| m.to_string()).collect()
}
