//! DOCX text extractor
//!
//! Reads `word/document.xml` out of the zip container and keeps the text
//! runs (`w:t`). Paragraph ends and explicit breaks become newlines, tabs
//! become `\t`.

use crate::error::{AppError, Result};
use crate::ports::documents::DocumentExtractor;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    fn read_document_part(path: &Path) -> Result<String> {
        let file = File::open(path)?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| {
            AppError::DocumentExtraction(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let mut entry = archive.by_name(DOCUMENT_PART).map_err(|e| {
            AppError::DocumentExtraction(format!(
                "{} has no {}: {}",
                path.display(),
                DOCUMENT_PART,
                e
            ))
        })?;

        let mut xml = String::new();
        entry.read_to_string(&mut xml)?;
        Ok(xml)
    }

    /// Collect the visible text of a WordprocessingML body
    pub fn text_from_xml(xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);
        let mut text = String::new();
        let mut in_run_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_run_text = false,
                    b"w:p" => text.push('\n'),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"w:tab" => text.push('\t'),
                    b"w:br" | b"w:cr" => text.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(t)) if in_run_text => {
                    let unescaped = t.unescape().map_err(|e| {
                        AppError::DocumentExtraction(format!("Invalid document text: {}", e))
                    })?;
                    text.push_str(&unescaped);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(AppError::DocumentExtraction(format!(
                        "Malformed document XML at {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {}
            }
        }

        Ok(text.trim_end().to_string())
    }
}

impl DocumentExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let xml = Self::read_document_part(path)?;
        Self::text_from_xml(&xml)
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["doc", "docx"]
    }
}
