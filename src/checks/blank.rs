//! Blank-space check: multi-space runs and trailing whitespace.

use serde::{Deserialize, Serialize};

use crate::analysis::context::locate_blank;

/// A maximal run of consecutive whitespace characters of length >= 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankRun {
    /// 0-based char position of the first character of the run.
    pub position: usize,
    /// Number of whitespace characters in the run.
    pub length: usize,
}

/// Blank-space findings for one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankFinding {
    /// 1-based line number.
    pub line: usize,
    /// Runs of two or more consecutive whitespace characters.
    pub runs: Vec<BlankRun>,
    /// Whether the line's last character is whitespace.
    pub trailing: bool,
}

/// Scan every line for whitespace problems.
///
/// Lines without whitespace are skipped; lines whose only whitespace is
/// single separators produce no finding.
pub fn check_blanks(lines: &[String]) -> Vec<BlankFinding> {
    let mut findings = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let blanks = locate_blank(line);
        if blanks.is_empty() {
            continue;
        }

        let mut runs = Vec::new();
        let mut start = blanks[0];
        let mut prev = blanks[0];
        for &pos in &blanks[1..] {
            if pos == prev + 1 {
                prev = pos;
                continue;
            }
            if prev > start {
                runs.push(BlankRun { position: start, length: prev - start + 1 });
            }
            start = pos;
            prev = pos;
        }
        if prev > start {
            runs.push(BlankRun { position: start, length: prev - start + 1 });
        }

        let trailing = *blanks.last().unwrap() == line.chars().count() - 1;
        if !runs.is_empty() || trailing {
            findings.push(BlankFinding { line: index + 1, runs, trailing });
        }
    }
    findings
}
