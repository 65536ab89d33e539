//! Add command implementation.

use crate::cli::{AddArgs, join_words};
use crate::config::Context;
use crate::error::Result;
use crate::format::format_issue_detail;

use super::print_json;

/// Execute the add command.
///
/// # Errors
///
/// Returns `Validation` if the text is blank, or an I/O error if the record
/// cannot be written.
pub fn execute(args: &AddArgs, ctx: &Context) -> Result<()> {
    let text = join_words(&args.text).unwrap_or_default();

    let issue = ctx.store.create(&text)?;
    ctx.store.save(&issue)?;
    tracing::info!(id = issue.id(), "added issue");

    if ctx.json {
        print_json(&issue)
    } else {
        println!("{}", format_issue_detail(&issue));
        Ok(())
    }
}
