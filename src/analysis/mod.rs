//! Character-level analysis: context extraction and punctuation verification.
//!
//! [`context`] slices bounded snippets around each occurrence of a target
//! character; [`verify`] applies the per-character contextual rules to those
//! snippets.

pub mod context;
pub mod verify;

// Re-export commonly used types
pub use context::{Context, extract, locate, locate_blank};
pub use verify::{PunctKind, verify};
