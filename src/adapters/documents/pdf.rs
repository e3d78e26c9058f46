//! PDF text extractor backed by pdf-extract
//!
//! pdf-extract panics on some structurally valid files (for example a font
//! referenced without `/Resources`), so extraction runs under
//! `catch_unwind` and a panic is reported as an extraction error.

use crate::error::{AppError, Result};
use crate::ports::documents::DocumentExtractor;
use std::any::Any;
use std::panic;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

impl DocumentExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let text = match panic::catch_unwind(|| pdf_extract::extract_text(path)) {
            Ok(result) => result.map_err(|e| {
                AppError::DocumentExtraction(format!(
                    "Failed to read PDF {}: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::warn!("PDF parser panicked on {}: {}", path.display(), message);
                return Err(AppError::DocumentExtraction(format!(
                    "Failed to read PDF {}: parser panicked: {}",
                    path.display(),
                    message
                )));
            }
        };

        Ok(text.trim().to_string())
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["pdf"]
    }
}
