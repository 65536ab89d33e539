//! `kiwi` - minimal file-backed issue tracker
//!
//! One YAML record per issue under `.kiwi/`. No daemon, no database.

use clap::Parser;
use kiwi::cli::Cli;
use kiwi::logging::init_logging;
use kiwi::{KiwiError, StructuredError};
use std::io::{self, IsTerminal};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let json = cli.json;
    if let Err(e) = kiwi::run(cli) {
        handle_error(&e, json);
    }
}

/// Print the error to stderr and exit with its code.
///
/// JSON when `--json` is set, otherwise human-readable with color on a TTY.
fn handle_error(err: &KiwiError, json_mode: bool) -> ! {
    let structured = StructuredError::from_error(err);
    let exit_code = structured.code.exit_code();

    if json_mode {
        let json = structured.to_json();
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
        );
    } else {
        let use_color = io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        eprintln!("{}", structured.to_human(use_color));
    }

    std::process::exit(exit_code);
}
