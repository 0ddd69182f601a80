//! Output formatting for CLI commands.

use crate::cli::args::{GalleyArgs, OutputFormat};
use crate::error::Result;
use crate::report::{CharReport, CharStatus, Report};

/// Render a report in the selected format.
pub fn output_report(report: &Report, args: &GalleyArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            output_human(report);
            Ok(())
        }
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output as JSON (one object with all findings).
fn output_json(report: &Report, args: &GalleyArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{json}");
    Ok(())
}

/// Human-readable console rendering, section by section.
fn output_human(report: &Report) {
    print_blank_findings(report);
    print_period_findings(report);
    for section in &report.char_reports {
        print_char_report(section);
    }
}

fn print_blank_findings(report: &Report) {
    println!("Checking for blank space problems:");
    for finding in &report.blank_findings {
        if !finding.runs.is_empty() {
            println!("Line {}:", finding.line);
            for run in &finding.runs {
                println!(
                    "   Position {}, blank sequence of length {}",
                    run.position, run.length
                );
            }
        }
        if finding.trailing {
            println!("NB: blank at end of line {}", finding.line);
        }
        println!();
    }
    println!("Done with blanks check.\n");
}

fn print_period_findings(report: &Report) {
    println!("Checking for bad periods and unconverted ellipses:");
    if report.period_lines.is_empty() {
        println!("   No bad periods or suspicious unconverted ellipses found.");
    } else {
        let list: Vec<String> = report.period_lines.iter().map(|n| n.to_string()).collect();
        println!("   Possible bad periods or unconverted ellipses found in lines:");
        println!("   {}", list.join(", "));
    }
    println!("Done with bad period and unconverted ellipsis check.\n");
}

fn print_char_report(section: &CharReport) {
    println!("Searching for {}, {}:", section.character, section.name);
    match section.status {
        CharStatus::NoneFound => println!("None found."),
        CharStatus::AllVerified => println!("All occurrences verified."),
        CharStatus::Flagged => {
            let mut current_line = 0;
            for occurrence in &section.flagged {
                if occurrence.line != current_line {
                    if current_line != 0 {
                        println!();
                    }
                    println!("Line {}:", occurrence.line);
                    current_line = occurrence.line;
                }
                println!(
                    "  pos {}: ...{}{}{}...",
                    occurrence.position, occurrence.left, section.character, occurrence.right
                );
            }
            println!();
        }
    }
    println!();
}
