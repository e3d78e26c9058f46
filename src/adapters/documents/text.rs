//! Plain text extractor

use crate::error::Result;
use crate::ports::documents::DocumentExtractor;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl DocumentExtractor for TextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["txt"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "Q4 roadmap\nAlice: frontend").unwrap();

        assert_eq!(
            TextExtractor.extract(&path).unwrap(),
            "Q4 roadmap\nAlice: frontend"
        );
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TextExtractor.extract(&dir.path().join("nope.txt")).is_err());
    }
}
