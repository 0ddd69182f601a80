//! Context extraction around character occurrences.
//!
//! Positions are char positions, not byte offsets: every character this tool
//! verifies is multibyte in UTF-8, and reports must index lines the way a
//! human counting characters would.

/// Left/right snippets around one occurrence of a character.
///
/// Each side holds at most the configured radius of characters and is
/// shorter only at a line boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub left: String,
    pub right: String,
}

/// Find all positions of a character in a line, left to right.
pub fn locate(line: &str, character: char) -> Vec<usize> {
    line.chars()
        .enumerate()
        .filter_map(|(i, ch)| (ch == character).then_some(i))
        .collect()
}

/// Find all positions of whitespace characters in a line.
pub fn locate_blank(line: &str) -> Vec<usize> {
    line.chars()
        .enumerate()
        .filter_map(|(i, ch)| ch.is_whitespace().then_some(i))
        .collect()
}

/// Slice the context around the occurrence at `position`.
///
/// `left` ends just before `position`; `right` starts just after it. Both
/// are clipped to at most `radius` characters. Pure function of its inputs;
/// `position` must be a valid char position in `line`.
pub fn extract(line: &str, position: usize, radius: usize) -> Context {
    let chars: Vec<char> = line.chars().collect();
    let left_extent = position.saturating_sub(radius);
    let right_end = (position + 1 + radius).min(chars.len());

    Context {
        left: chars[left_extent..position].iter().collect(),
        right: chars[position + 1..right_end].iter().collect(),
    }
}
