//! `kiwi` - minimal file-backed issue tracker
//!
//! This crate provides the CLI for the `kiwi` tool. Storage lives in the
//! `kiwi-lib` crate; this crate parses arguments, resolves the runtime
//! context and renders results.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Runtime context (workspace, user, output mode)
//! - [`error`] - Error codes and structured error output
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing-subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;

pub use error::{ErrorCode, KiwiError, Result, StructuredError};

/// Run a parsed command line.
///
/// This is the main entry point called from `main()` after logging is set up.
///
/// # Errors
///
/// Returns an error if the context cannot be resolved or the command fails.
pub fn run(cli: cli::Cli) -> Result<()> {
    let ctx = config::Context::from_env(config::CliOverrides { json: cli.json })?;
    cli::dispatch(cli.command, &ctx)
}
