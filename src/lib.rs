//! # Galley
//!
//! Heuristic proofreading checks for plain-text manuscripts.
//!
//! ## Checks
//!
//! - Irregular whitespace: runs of two or more blanks, trailing blanks
//! - Residual literal ellipses: `..`, `...`, `. . .`
//! - Context-sensitive misuse of typographic punctuation: em and en dashes,
//!   curly single and double quotes, the ellipsis glyph
//!
//! The contextual rules live in [`analysis::verify`]; [`report::Proofreader`]
//! drives them over a [`document::Document`] and returns a serializable
//! [`report::Report`]. A companion paragraph wrapper ([`wrap`]) turns a
//! manuscript into `<p>`-wrapped HTML lines.

pub mod analysis;
pub mod checks;
pub mod cli;
pub mod document;
pub mod error;
pub mod inventory;
pub mod report;
pub mod wrap;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
