//! Command-line interface for `kiwi`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Context;
use crate::error::Result;

/// `kiwi` - minimal file-backed issue tracker.
#[derive(Parser, Debug)]
#[command(name = "kiwi")]
#[command(
    author,
    version,
    about = "Minimal file-backed issue tracker",
    long_about = None,
    after_help = "Issues live in .kiwi/ under the current directory, one YAML file per issue."
)]
pub struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "KIWI_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Track a new issue
    Add(AddArgs),

    /// Replace an issue's text (reads stdin when no text is given)
    Update(UpdateArgs),

    /// Mark an issue resolved
    Resolve(IdArgs),

    /// Show an issue's full record
    Info(IdArgs),

    /// List every issue with its state
    List,

    /// Show whether this is a project, or list issues matching a prefix
    Status(StatusArgs),

    /// Remove the project and every issue in it
    Untrack,

    /// Show version information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Issue text (words are joined with spaces)
    pub text: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    /// Issue id or id prefix
    pub id: String,

    /// New text; omit to type it on stdin (end with CTRL-D)
    pub text: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct IdArgs {
    /// Issue id or id prefix
    pub id: String,
}

#[derive(Args, Debug, Default)]
pub struct StatusArgs {
    /// Only list issues whose id starts with this prefix
    pub pattern: Option<String>,
}

/// Join positional words into a single text, or `None` if there were none.
#[must_use]
pub fn join_words(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Run a parsed command against a context.
///
/// # Errors
///
/// Returns an error if the command fails.
pub fn dispatch(command: Commands, ctx: &Context) -> Result<()> {
    tracing::debug!(command = command.name(), "dispatching");
    match command {
        Commands::Add(args) => commands::add::execute(&args, ctx),
        Commands::Update(args) => commands::update::execute(&args, ctx),
        Commands::Resolve(args) => commands::resolve::execute(&args, ctx),
        Commands::Info(args) => commands::info::execute(&args, ctx),
        Commands::List => commands::list::execute(ctx),
        Commands::Status(args) => commands::status::execute(&args, ctx),
        Commands::Untrack => commands::untrack::execute(ctx),
        Commands::Version => commands::version::execute(ctx),
    }
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Update(_) => "update",
            Self::Resolve(_) => "resolve",
            Self::Info(_) => "info",
            Self::List => "list",
            Self::Status(_) => "status",
            Self::Untrack => "untrack",
            Self::Version => "version",
        }
    }
}
