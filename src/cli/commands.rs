//! Command implementations for the galley CLI.

use std::io::{self, Write};

use crate::cli::args::{CheckArgs, Command, GalleyArgs, OutputFormat, WrapArgs};
use crate::cli::output::output_report;
use crate::document::Document;
use crate::error::{GalleyError, Result};
use crate::inventory::CharInventory;
use crate::report::{CheckConfig, Proofreader};
use crate::wrap;

/// Execute a CLI command.
pub fn execute_command(args: GalleyArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => run_checks(check_args.clone(), &args),
        Command::Wrap(wrap_args) => wrap_paragraphs(wrap_args.clone(), &args),
    }
}

/// Run the proofreading checks over one manuscript.
fn run_checks(args: CheckArgs, cli_args: &GalleyArgs) -> Result<()> {
    let human = cli_args.output_format == OutputFormat::Human;
    if human && cli_args.verbosity() > 0 {
        println!(
            "Started at {}, checking file {}:",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            args.file.display()
        );
        print!("Reading file for inventory... ");
        io::stdout().flush()?;
    }

    let document = Document::from_path(&args.file)?;
    let inventory = CharInventory::scan(document.lines());

    if human && cli_args.verbosity() > 0 {
        println!("done.\n");
        if !args.no_inventory {
            inventory.pretty_print();
        }
    }

    let proofreader = Proofreader::new(CheckConfig::with_radius(args.radius));
    let report = proofreader.run_with_inventory(&document, &inventory);

    output_report(&report, cli_args)?;

    if report.has_rule_errors() {
        if human {
            println!("Finished with errors.");
        }
        return Err(GalleyError::analysis(format!(
            "{} rule evaluation error(s); see flagged occurrences above",
            report.rule_errors
        )));
    }
    if human && cli_args.verbosity() > 0 {
        println!("Finished with no errors.");
    }
    Ok(())
}

/// Wrap every manuscript line in an HTML paragraph tag.
fn wrap_paragraphs(args: WrapArgs, cli_args: &GalleyArgs) -> Result<()> {
    let document = Document::from_path(&args.file)?;

    if cli_args.verbosity() > 0 {
        print!("Writing to file... ");
        io::stdout().flush()?;
    }
    wrap::add_paragraphs(document.lines(), &args.output)?;
    if cli_args.verbosity() > 0 {
        println!("done.");
        println!(
            "Wrote {} paragraph(s) to {}.",
            document.len(),
            args.output.display()
        );
    }
    Ok(())
}
