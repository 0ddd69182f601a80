//! Error types for the galley library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`GalleyError`] enum. File- and usage-level errors are fatal at the
//! command level; an [`GalleyError::UnsupportedCharacter`] is recoverable:
//! the driver logs it, treats the occurrence as unverified, and continues.
//!
//! # Examples
//!
//! ```
//! use galley::error::{GalleyError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GalleyError::document("not a regular file"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("ok"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for galley operations.
#[derive(Error, Debug)]
pub enum GalleyError {
    /// I/O errors (reading the manuscript, writing wrapper output).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Document loading errors (missing file, bad encoding).
    #[error("Document error: {0}")]
    Document(String),

    /// Verification requested for a character with no defined rule.
    #[error("checks for {ch:?} (U+{code:04X}) have not been defined", ch = .0, code = *.0 as u32)]
    UnsupportedCharacter(char),

    /// Rule-evaluation errors detected during a check run.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization errors (report output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`GalleyError`].
pub type Result<T> = std::result::Result<T, GalleyError>;

impl GalleyError {
    /// Create a new document error.
    pub fn document<S: Into<String>>(msg: S) -> Self {
        GalleyError::Document(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GalleyError::Analysis(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = GalleyError::document("no such file");
        assert_eq!(error.to_string(), "Document error: no such file");

        let error = GalleyError::analysis("2 rule evaluation errors");
        assert_eq!(error.to_string(), "Analysis error: 2 rule evaluation errors");
    }

    #[test]
    fn test_unsupported_character_display() {
        let error = GalleyError::UnsupportedCharacter('$');
        assert_eq!(
            error.to_string(),
            "checks for '$' (U+0024) have not been defined"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let galley_error = GalleyError::from(io_error);

        match galley_error {
            GalleyError::Io(_) => {}
            other => panic!("expected Io variant, got {other:?}"),
        }
    }
}
