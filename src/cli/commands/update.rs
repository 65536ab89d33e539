//! Update command implementation.

use std::io::{self, Read};

use kiwi_lib::validate_text;

use crate::cli::{UpdateArgs, join_words};
use crate::config::Context;
use crate::error::Result;
use crate::format::format_issue_detail;

use super::{print_json, resolve_issue};

/// Execute the update command, reading replacement text from stdin when
/// none was given on the command line.
///
/// # Errors
///
/// Returns `IssueNotFound` if nothing matches, `Validation` if the new text
/// is blank, or an I/O error.
pub fn execute(args: &UpdateArgs, ctx: &Context) -> Result<()> {
    let stdin = io::stdin();
    execute_with_input(args, ctx, &mut stdin.lock())
}

/// Execute the update command with an explicit input source.
///
/// # Errors
///
/// See [`execute`].
pub fn execute_with_input(args: &UpdateArgs, ctx: &Context, input: &mut dyn Read) -> Result<()> {
    let mut issue = resolve_issue(ctx, &args.id)?;

    let text = if let Some(text) = join_words(&args.text) {
        text
    } else {
        // Prompts go to stderr so stdout only carries the result.
        eprintln!("---\nDescription: {}\n---", issue.text());
        eprintln!("Enter your new description (CTRL-D to accept):");
        read_description(input)?
    };

    validate_text(&text)?;
    issue.set_text(text);
    ctx.store.save(&issue)?;
    tracing::info!(id = issue.id(), "updated issue");

    if ctx.json {
        print_json(&issue)
    } else {
        println!("{}", format_issue_detail(&issue));
        Ok(())
    }
}

/// Read text until end of input, dropping trailing whitespace.
///
/// # Errors
///
/// Returns `Io` if the input cannot be read.
pub fn read_description(input: &mut dyn Read) -> Result<String> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    Ok(text.trim_end().to_string())
}
