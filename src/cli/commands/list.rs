//! List command implementation.

use crate::config::Context;
use crate::error::Result;
use crate::format::format_issue_line;

use super::{print_json, report_skipped};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the workspace cannot be read.
pub fn execute(ctx: &Context) -> Result<()> {
    let scan = ctx.store.all()?;
    report_skipped(&scan);

    if ctx.json {
        return print_json(&scan.issues);
    }

    if scan.is_empty() {
        println!("No issues found.");
    } else {
        for issue in &scan.issues {
            println!("{}", format_issue_line(issue));
        }
    }
    Ok(())
}
