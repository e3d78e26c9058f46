//! Reference document processing
//!
//! Resolves uploaded file names under the upload directory, extracts their
//! text with the extractor registered for the file extension, and joins the
//! results with a blank line. Missing files, unsupported extensions,
//! extraction failures and documents with no text contribute nothing.

pub mod docx;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod pdf;
pub mod text;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use text::TextExtractor;

use crate::ports::documents::DocumentExtractor;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Separator between documents in the aggregated context
pub const DOCUMENT_SEPARATOR: &str = "\n\n";

/// Turns reference document names into one context string
#[derive(Clone)]
pub struct DocumentProcessor {
    upload_dir: PathBuf,
    extractors: HashMap<&'static str, Arc<dyn DocumentExtractor>>,
}

impl DocumentProcessor {
    /// Processor with the PDF, DOCX and TXT extractors registered
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self::empty(upload_dir)
            .with_extractor(Arc::new(PdfExtractor))
            .with_extractor(Arc::new(DocxExtractor))
            .with_extractor(Arc::new(TextExtractor))
    }

    /// Processor with no extractors; every document is skipped until one is registered
    pub fn empty(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            extractors: HashMap::new(),
        }
    }

    /// Register `extractor` for each of its extensions, replacing earlier ones
    pub fn with_extractor(mut self, extractor: Arc<dyn DocumentExtractor>) -> Self {
        for &extension in extractor.extensions() {
            self.extractors.insert(extension, Arc::clone(&extractor));
        }
        self
    }

    /// Extract and join the text of `filenames`, in order
    pub fn process_documents(&self, filenames: &[String]) -> String {
        let texts: Vec<String> = filenames
            .iter()
            .filter_map(|name| self.process_document(name))
            .collect();

        log::info!(
            "Aggregated {} of {} reference documents",
            texts.len(),
            filenames.len()
        );

        texts.join(DOCUMENT_SEPARATOR)
    }

    fn process_document(&self, filename: &str) -> Option<String> {
        let relative = Path::new(filename);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            log::warn!("Skipping document outside upload dir: {}", filename);
            return None;
        }

        let path = self.upload_dir.join(relative);
        if !path.is_file() {
            log::warn!("Skipping missing document: {}", filename);
            return None;
        }

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let Some(extractor) = self.extractors.get(extension.as_str()) else {
            log::warn!("Skipping unsupported document type: {}", filename);
            return None;
        };

        match extractor.extract(&path) {
            Ok(text) if text.trim().is_empty() => {
                log::warn!("Skipping document with no text: {}", filename);
                None
            }
            Ok(text) => {
                log::debug!("Extracted {} characters from {}", text.len(), filename);
                Some(text)
            }
            Err(e) => {
                log::warn!("Skipping unreadable document {}: {}", filename, e);
                None
            }
        }
    }
}
