//! Command line argument parsing for the galley CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Galley - heuristic proofreading checks for plain-text manuscripts
#[derive(Parser, Debug, Clone)]
#[command(name = "galley")]
#[command(about = "Heuristic proofreading checks for plain-text manuscripts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GalleyArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GalleyArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run proofreading checks on a manuscript
    Check(CheckArgs),

    /// Wrap each manuscript line in an HTML paragraph tag
    Wrap(WrapArgs),
}

/// Arguments for running the checks
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the manuscript text file (UTF-8, optionally BOM-prefixed)
    #[arg(value_name = "TEXT_FILE")]
    pub file: PathBuf,

    /// Context characters kept on each side of an occurrence
    #[arg(short, long, default_value = "10")]
    pub radius: usize,

    /// Skip printing the character inventory
    #[arg(long)]
    pub no_inventory: bool,
}

/// Arguments for the paragraph wrapper
#[derive(Parser, Debug, Clone)]
pub struct WrapArgs {
    /// Path to the manuscript text file (UTF-8, optionally BOM-prefixed)
    #[arg(value_name = "TEXT_FILE")]
    pub file: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = crate::wrap::OUTPUT_FILE)]
    pub output: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable console output
    Human,
    /// JSON output
    Json,
}
