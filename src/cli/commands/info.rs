//! Info command implementation.

use crate::cli::IdArgs;
use crate::config::Context;
use crate::error::Result;
use crate::format::format_issue_info;

use super::{print_json, resolve_issue};

/// Execute the info command.
///
/// # Errors
///
/// Returns `IssueNotFound` if nothing matches, or an error if the record
/// cannot be read.
pub fn execute(args: &IdArgs, ctx: &Context) -> Result<()> {
    let issue = resolve_issue(ctx, &args.id)?;

    if ctx.json {
        print_json(&issue)
    } else {
        println!("{}", format_issue_info(&issue));
        Ok(())
    }
}
