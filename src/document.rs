//! Manuscript loading.
//!
//! A [`Document`] is the ordered sequence of lines of a plain-text
//! manuscript, read into memory once and immutable for the duration of a
//! check run. Line numbers in reports are 1-based; the `lines` slice itself
//! is 0-based.

use std::fs;
use std::path::Path;

use crate::error::{GalleyError, Result};

/// An in-memory manuscript: an ordered, immutable sequence of lines.
///
/// The whole file is loaded at once. This bounds the tool to
/// manuscript-scale input (tens of thousands of lines), which is an accepted
/// limitation rather than something to stream around.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Load a document from a UTF-8 text file.
    ///
    /// A leading byte-order mark is stripped if present. Line terminators
    /// (`\n` or `\r\n`) are removed from the stored lines.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(GalleyError::document(format!(
                "file path {} does not exist",
                path.display()
            )));
        }
        let text = fs::read_to_string(path)?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        Ok(Self::from_lines(text.lines().map(str::to_owned).collect()))
    }

    /// Build a document from already-split lines.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Document { lines }
    }

    /// The lines of the document, without terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_from_lines() {
        let doc = Document::from_lines(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.lines()[1], "two");
    }

    #[test]
    fn test_from_path_strips_bom_and_terminators() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("\u{feff}first line\r\nsecond line\n".as_bytes())
            .unwrap();

        let doc = Document::from_path(file.path()).unwrap();
        assert_eq!(doc.lines(), &["first line".to_string(), "second line".to_string()]);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Document::from_path("/no/such/manuscript.txt").unwrap_err();
        assert!(matches!(err, GalleyError::Document(_)));
    }
}
