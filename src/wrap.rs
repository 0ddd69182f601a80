//! Paragraph wrapper: the companion generate step.
//!
//! Shares nothing with the verification core beyond the document loader.
//! Each manuscript line becomes one HTML paragraph in the output file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;

/// Default output file name.
pub const OUTPUT_FILE: &str = "output.txt";

/// Write every line wrapped in `<p>…</p>` to `dest`.
///
/// The output is UTF-8 with a leading byte-order mark. The content is
/// written to a temporary file in the destination directory and only
/// persisted into place after the full write completes, so a failed run
/// never leaves a partial output file behind.
pub fn add_paragraphs(lines: &[String], dest: &Path) -> Result<()> {
    let dir = dest.parent().filter(|p| !p.as_os_str().is_empty());
    let mut output = match dir {
        Some(dir) => NamedTempFile::new_in(dir)?,
        None => NamedTempFile::new_in(".")?,
    };

    output.write_all("\u{feff}".as_bytes())?;
    for line in lines {
        writeln!(output, "<p>{line}</p>")?;
    }
    output.flush()?;
    output.persist(dest).map_err(|e| e.error)?;
    Ok(())
}
