/// Document extraction port trait
///
/// Turns one reference document on disk into plain text.
/// Implementations: plain text, PDF, DOCX.
use crate::error::Result;
use std::path::Path;

/// Port trait for document text extraction
#[cfg_attr(test, mockall::automock)]
pub trait DocumentExtractor: Send + Sync {
    /// Extract the full text of the document at `path`
    fn extract(&self, path: &Path) -> Result<String>;

    /// Lower-case extensions (without the dot) this extractor handles
    fn extensions(&self) -> &'static [&'static str];
}
