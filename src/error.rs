/// Error types for the meeting summarizer
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Configuration failures detected before any backend is contacted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    #[error("Missing credential: {0} is not set")]
    MissingCredential(String),

    #[error("Empty credential: {0} is set but empty")]
    EmptyCredential(String),
}

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Provider response error: {0}")]
    ProviderResponse(String),

    #[error("Error generating summary: {0}")]
    SummaryGeneration(#[source] Box<AppError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Document extraction error: {0}")]
    DocumentExtraction(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Wraps an error raised while producing a summary
    pub fn summary_generation(inner: AppError) -> Self {
        AppError::SummaryGeneration(Box::new(inner))
    }

    /// True when this error, or the error it wraps, came from a backend response
    pub fn is_provider_response(&self) -> bool {
        match self {
            AppError::ProviderResponse(_) => true,
            AppError::SummaryGeneration(inner) => inner.is_provider_response(),
            _ => false,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Convert AppError to a string for callers that only surface messages
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.to_string()
    }
}
