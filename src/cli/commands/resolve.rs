//! Resolve command implementation.

use crate::cli::IdArgs;
use crate::config::Context;
use crate::error::Result;

use super::{print_json, resolve_issue};

/// Execute the resolve command.
///
/// Resolving an already resolved issue succeeds and rewrites the same record.
///
/// # Errors
///
/// Returns `IssueNotFound` if nothing matches, or an I/O error on save.
pub fn execute(args: &IdArgs, ctx: &Context) -> Result<()> {
    let mut issue = resolve_issue(ctx, &args.id)?;
    if !issue.resolve() {
        tracing::debug!(id = issue.id(), "issue already resolved");
    }
    ctx.store.save(&issue)?;

    if ctx.json {
        print_json(&issue)
    } else {
        println!("{} {}", issue.id(), issue.state().label());
        Ok(())
    }
}
