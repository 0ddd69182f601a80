//! Galley CLI binary.

use clap::Parser;
use clap::error::ErrorKind;
use galley::cli::{args::GalleyArgs, commands::execute_command};
use std::process;

fn main() {
    // Parse command line arguments; usage errors exit 1, help/version exit 0.
    let args = match GalleyArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    // Route log verbosity the same way as the checks' own verbosity flag.
    if std::env::var_os("RUST_LOG").is_none() {
        let level = match args.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            _ => "debug",
        };
        unsafe {
            std::env::set_var("RUST_LOG", level);
        }
    }
    pretty_env_logger::init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
