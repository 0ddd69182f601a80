//! End-to-end scenarios: load a manuscript from disk, run the full check
//! set, and inspect the aggregated report.

use std::fs;
use std::io::Write;

use galley::analysis::verify::{EM_DASH, LEFT_DOUBLE_QUOTE, RIGHT_DOUBLE_QUOTE};
use galley::document::Document;
use galley::inventory::CharInventory;
use galley::report::{CharStatus, CheckConfig, Proofreader};
use galley::wrap;
use tempfile::NamedTempFile;

fn write_manuscript(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn full_run_over_mixed_manuscript() {
    let file = write_manuscript(concat!(
        "\u{feff}He said\u{2014}truly\u{2014}it was fine.\n",
        "  twice  spaced\n",
        "This is odd. . . really\n",
        "end of sentence \n",
        "\u{201C}9 o'clock\u{201D} sharp\n",
    ));

    let document = Document::from_path(file.path()).unwrap();
    assert_eq!(document.len(), 5);
    // BOM must not leak into the first line's checks.
    assert!(document.lines()[0].starts_with("He said"));

    let report = Proofreader::default().run(&document);

    // Blank space: the double-space runs and the trailing blank.
    let runs_line = report
        .blank_findings
        .iter()
        .find(|f| f.line == 2)
        .expect("line 2 should have blank findings");
    assert_eq!(runs_line.runs.len(), 2);
    assert_eq!(runs_line.runs[0].position, 0);
    assert_eq!(runs_line.runs[0].length, 2);
    assert_eq!(runs_line.runs[1].position, 7);
    assert_eq!(runs_line.runs[1].length, 2);
    assert!(report.blank_findings.iter().any(|f| f.line == 4 && f.trailing));

    // Literal ellipsis: the space-padded three-period pattern on line 3.
    assert_eq!(report.period_lines, vec![3]);

    // Both em dashes join letters, so the em dash section is clean.
    let em = report
        .char_reports
        .iter()
        .find(|r| r.character == EM_DASH)
        .unwrap();
    assert_eq!(em.status, CharStatus::AllVerified);

    // The left double quote precedes a digit at line start: flagged.
    let ldq = report
        .char_reports
        .iter()
        .find(|r| r.character == LEFT_DOUBLE_QUOTE)
        .unwrap();
    assert_eq!(ldq.status, CharStatus::Flagged);
    assert_eq!(ldq.flagged[0].line, 5);
    assert_eq!(ldq.flagged[0].position, 0);

    // The closing double quote sits after a letter and before whitespace.
    let rdq = report
        .char_reports
        .iter()
        .find(|r| r.character == RIGHT_DOUBLE_QUOTE)
        .unwrap();
    assert_eq!(rdq.status, CharStatus::AllVerified);

    // The straight apostrophe in "o'clock" has no rule: a rule-evaluation
    // error, reflected in the exit policy.
    assert!(report.has_rule_errors());
}

#[test]
fn identical_output_on_repeated_runs() {
    let file = write_manuscript("A line with\u{2026} an ellipsis and caf\u{e9}.\n");
    let document = Document::from_path(file.path()).unwrap();
    let proofreader = Proofreader::default();

    assert_eq!(proofreader.run(&document), proofreader.run(&document));
}

#[test]
fn snippet_radius_is_honored_end_to_end() {
    let line = format!("{}{}{}", "x".repeat(30), EM_DASH, "y".repeat(30));
    let file = write_manuscript(&format!("{line}\n"));
    let document = Document::from_path(file.path()).unwrap();

    let proofreader = Proofreader::new(CheckConfig::with_radius(4));
    let report = proofreader.run(&document);

    // The dash joins digits-free letters, so nothing is flagged; force a
    // flag by checking a dash at line start instead.
    assert!(report.char_reports.iter().all(|r| r.flagged.iter().all(|o| {
        o.left.chars().count() <= 4 && o.right.chars().count() <= 4
    })));

    let file = write_manuscript(&format!("{EM_DASH}{}\n", "y".repeat(30)));
    let document = Document::from_path(file.path()).unwrap();
    let report = proofreader.run(&document);
    let em = report
        .char_reports
        .iter()
        .find(|r| r.character == EM_DASH)
        .unwrap();
    assert_eq!(em.status, CharStatus::Flagged);
    assert_eq!(em.flagged[0].left, "");
    assert_eq!(em.flagged[0].right, "yyyy");
}

#[test]
fn inventory_matches_document_content() {
    let file = write_manuscript("aa b\u{2014}\n");
    let document = Document::from_path(file.path()).unwrap();
    let inventory = CharInventory::scan(document.lines());

    assert_eq!(inventory.count('a'), 2);
    assert_eq!(inventory.count('\u{2014}'), 1);
    assert!(!inventory.contains('\n'));

    let proofreader = Proofreader::default();
    let chars = proofreader.chars_to_check(&inventory);
    assert_eq!(chars.into_iter().collect::<Vec<_>>(), vec!['\u{2014}']);
}

#[test]
fn wrap_writes_paragraphs_from_file() {
    let file = write_manuscript("\u{feff}First line\nSecond line\n");
    let document = Document::from_path(file.path()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join(wrap::OUTPUT_FILE);
    wrap::add_paragraphs(document.lines(), &dest).unwrap();

    let written = fs::read_to_string(&dest).unwrap();
    assert_eq!(
        written,
        "\u{feff}<p>First line</p>\n<p>Second line</p>\n"
    );
}
