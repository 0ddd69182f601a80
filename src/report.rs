//! Report driver: orchestrates all checks over a document.
//!
//! The driver is a pure batch computation: it takes an immutable
//! [`Document`], runs the blank-space and literal-ellipsis checks, then
//! verifies every occurrence of every checkable character, and returns a
//! serializable [`Report`]. Rendering lives in the CLI layer.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::context::{extract, locate};
use crate::analysis::verify::{
    self, EM_DASH, EN_DASH, ELLIPSIS, LEFT_DOUBLE_QUOTE, LEFT_SINGLE_QUOTE, RIGHT_DOUBLE_QUOTE,
    RIGHT_SINGLE_QUOTE,
};
use crate::checks::{BlankFinding, check_blanks, check_periods};
use crate::document::Document;
use crate::inventory::{CharInventory, display_name};

/// Configuration for a check run.
///
/// Passed in at construction rather than read from process-wide globals, so
/// two runs with different settings cannot interfere.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Characters whose context is worth checking. Characters in this set
    /// without a verification rule (the straight quotes, by default) are
    /// surfaced for human review on every occurrence.
    pub checkable: BTreeSet<char>,
    /// Number of context characters kept on each side of an occurrence.
    pub radius: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            checkable: BTreeSet::from([
                EN_DASH,
                EM_DASH,
                '"',
                '\'',
                LEFT_SINGLE_QUOTE,
                RIGHT_SINGLE_QUOTE,
                LEFT_DOUBLE_QUOTE,
                RIGHT_DOUBLE_QUOTE,
                ELLIPSIS,
            ]),
            radius: 10,
        }
    }
}

impl CheckConfig {
    /// Default character set with a different snippet radius.
    pub fn with_radius(radius: usize) -> Self {
        CheckConfig { radius, ..Default::default() }
    }
}

/// One unverified occurrence, with its context snippets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedOccurrence {
    /// 1-based line number.
    pub line: usize,
    /// 0-based char position within the line.
    pub position: usize,
    pub left: String,
    pub right: String,
}

/// Outcome of checking one character across the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharStatus {
    /// The character never occurred (possible when the checkable set is
    /// wider than the inventory intersection).
    NoneFound,
    /// Every occurrence passed its contextual rule.
    AllVerified,
    /// At least one occurrence needs human review.
    Flagged,
}

/// Per-character section of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharReport {
    pub character: char,
    /// Unicode character name, for headers.
    pub name: String,
    pub status: CharStatus,
    /// Unverified occurrences, in document order.
    pub flagged: Vec<FlaggedOccurrence>,
    /// Whether this character has no verification rule at all (occurrences
    /// are shown for review, not judged).
    pub unsupported: bool,
}

/// Aggregated findings for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub blank_findings: Vec<BlankFinding>,
    /// 1-based numbers of lines with literal period-sequence ellipses.
    pub period_lines: Vec<usize>,
    pub char_reports: Vec<CharReport>,
    /// Count of rule-evaluation errors (occurrences of characters with no
    /// verification rule).
    pub rule_errors: usize,
}

impl Report {
    /// Whether any rule-evaluation errors were detected.
    pub fn has_rule_errors(&self) -> bool {
        self.rule_errors > 0
    }
}

/// Runs the full set of proofreading checks.
#[derive(Debug, Clone, Default)]
pub struct Proofreader {
    config: CheckConfig,
}

impl Proofreader {
    pub fn new(config: CheckConfig) -> Self {
        Proofreader { config }
    }

    /// Characters to check for this document: the configured set restricted
    /// to what actually occurs, plus every non-ASCII character present, so
    /// characters without a rule are still surfaced rather than silently
    /// skipped.
    pub fn chars_to_check(&self, inventory: &CharInventory) -> BTreeSet<char> {
        inventory
            .chars()
            .filter(|ch| self.config.checkable.contains(ch) || !ch.is_ascii())
            .collect()
    }

    /// Run every check and aggregate the findings.
    pub fn run(&self, document: &Document) -> Report {
        let inventory = CharInventory::scan(document.lines());
        self.run_with_inventory(document, &inventory)
    }

    /// Like [`Proofreader::run`], for callers that already scanned the
    /// inventory (the CLI pretty-prints it first).
    pub fn run_with_inventory(&self, document: &Document, inventory: &CharInventory) -> Report {
        let lines = document.lines();
        let mut rule_errors = 0;

        let mut char_reports = Vec::new();
        for character in self.chars_to_check(inventory) {
            let report = self.check_character(character, lines, &mut rule_errors);
            char_reports.push(report);
        }

        Report {
            blank_findings: check_blanks(lines),
            period_lines: check_periods(lines),
            char_reports,
            rule_errors,
        }
    }

    fn check_character(
        &self,
        character: char,
        lines: &[String],
        rule_errors: &mut usize,
    ) -> CharReport {
        let unsupported = verify::PunctKind::from_char(character).is_none();
        let mut found_any = false;
        let mut flagged = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            for position in locate(line, character) {
                found_any = true;
                let ctx = extract(line, position, self.config.radius);
                // A missing rule is recoverable: log it, flag the occurrence
                // for human review, and keep going.
                let verdict = verify::verify(character, &ctx.left, &ctx.right).unwrap_or_else(|e| {
                    log::error!("{e}");
                    *rule_errors += 1;
                    false
                });
                if !verdict {
                    flagged.push(FlaggedOccurrence {
                        line: index + 1,
                        position,
                        left: ctx.left,
                        right: ctx.right,
                    });
                }
            }
        }

        let status = if !found_any {
            CharStatus::NoneFound
        } else if flagged.is_empty() {
            CharStatus::AllVerified
        } else {
            CharStatus::Flagged
        };

        CharReport {
            character,
            name: display_name(character),
            status,
            flagged,
            unsupported,
        }
    }
}
