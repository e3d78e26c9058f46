//! Mock implementations for testing

use crate::domain::models::{CompletionRequest, CompletionResult};
use crate::error::{AppError, Result};
use crate::ports::documents::DocumentExtractor;
use crate::ports::llm::CompletionPort;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Completion service that echoes a scripted reply and records every request
#[derive(Clone, Default)]
pub struct RecordingCompletion {
    reply: Option<String>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl RecordingCompletion {
    /// Replies with `text` to every request
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            requests: Arc::default(),
        }
    }

    /// Fails every request as a backend that returned zero candidates
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionPort for RecordingCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Some(text) => Ok(CompletionResult { text: text.clone() }),
            None => Err(AppError::ProviderResponse(
                "No completion choices returned".to_string(),
            )),
        }
    }

    fn provider_name(&self) -> &str {
        "recording"
    }

    fn model(&self) -> &str {
        "recording-model"
    }
}

/// Extractor returning canned text per file name, failing for unknown names
#[derive(Clone, Default)]
pub struct FixedExtractor {
    texts: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<PathBuf>>>,
    extensions: &'static [&'static str],
}

impl FixedExtractor {
    pub fn new(extensions: &'static [&'static str]) -> Self {
        Self {
            extensions,
            ..Self::default()
        }
    }

    pub fn with_text(self, file_name: &str, text: &str) -> Self {
        self.texts
            .lock()
            .unwrap()
            .insert(file_name.to_string(), text.to_string());
        self
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl DocumentExtractor for FixedExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        self.texts
            .lock()
            .unwrap()
            .get(&name)
            .cloned()
            .ok_or_else(|| AppError::DocumentExtraction(format!("unreadable: {}", name)))
    }

    fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }
}
