//! Character inventory.
//!
//! Scans the document once and records every distinct character with its
//! occurrence count. The report driver intersects the inventory with the
//! configured checkable set so that checks only run for characters that are
//! actually present.

use std::collections::BTreeMap;

use unic_ucd_name::Name;

/// Distinct characters observed across a document, with counts.
#[derive(Debug, Clone, Default)]
pub struct CharInventory {
    counts: BTreeMap<char, usize>,
}

impl CharInventory {
    /// Scan lines and build the inventory.
    pub fn scan(lines: &[String]) -> Self {
        let mut counts = BTreeMap::new();
        for line in lines {
            for ch in line.chars() {
                *counts.entry(ch).or_insert(0) += 1;
            }
        }
        CharInventory { counts }
    }

    /// Iterate the distinct characters in sorted (code point) order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.keys().copied()
    }

    /// Occurrence count for a character (0 if absent).
    pub fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Whether the character occurs anywhere in the document.
    pub fn contains(&self, ch: char) -> bool {
        self.counts.contains_key(&ch)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Print the inventory to stdout, one character per line, with Unicode
    /// names and counts.
    pub fn pretty_print(&self) {
        println!("Character inventory ({} distinct):", self.len());
        for (ch, count) in &self.counts {
            println!("  {:?} {}: {}", ch, display_name(*ch), count);
        }
        println!();
    }
}

/// Unicode character name for report headers, or a placeholder when the
/// character has none (control characters, unassigned code points).
pub fn display_name(ch: char) -> String {
    match Name::of(ch) {
        Some(name) => name.to_string(),
        None => "(no Unicode name)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_counts() {
        let lines = vec!["aab".to_string(), "ba".to_string()];
        let inv = CharInventory::scan(&lines);
        assert_eq!(inv.count('a'), 3);
        assert_eq!(inv.count('b'), 2);
        assert_eq!(inv.count('c'), 0);
        assert!(inv.contains('b'));
        assert!(!inv.contains('\n'));
    }

    #[test]
    fn test_chars_sorted() {
        let lines = vec!["cba".to_string()];
        let inv = CharInventory::scan(&lines);
        let chars: Vec<char> = inv.chars().collect();
        assert_eq!(chars, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name('…'), "HORIZONTAL ELLIPSIS");
    }
}
