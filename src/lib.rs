//! Meeting summarizer
//!
//! Turns a meeting transcript plus optional reference documents into
//! structured notes by delegating generation to one of several hosted LLM
//! backends (Anthropic, OpenAI, DeepSeek) behind a single completion port.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod utils;

use adapters::documents::DocumentProcessor;
use services::SummaryService;

pub use config::GatewayConfig;
pub use domain::{CompletionRequest, CompletionResult, ModelId, ProviderKind, SummaryRequest};
pub use error::{AppError, ConfigError, Result};
pub use ports::CompletionPort;
pub use utils::credentials::{CredentialSource, EnvCredentials, StaticCredentials};

/// Application state shared by command handlers
#[derive(Clone)]
pub struct AppState {
    pub documents: DocumentProcessor,
    pub summaries: SummaryService,
}
