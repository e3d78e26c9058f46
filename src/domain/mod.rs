/// Domain layer - core business models
///
/// These models are vendor-agnostic and represent core business entities.
pub mod models;
pub mod prompts;

pub use models::{
    CompletionRequest, CompletionResult, ModelId, ProviderConfig, ProviderKind, RequestShape,
    SummaryRequest, DEFAULT_MODEL, SUPPORTED_MODELS,
};
pub use prompts::{PromptPair, PromptTemplates, SUMMARY_SECTIONS};
