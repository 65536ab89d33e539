//! Status command implementation.
//!
//! Without a pattern, reports whether the current directory is a project and
//! how many records it holds. With a pattern, lists the matching issues.

use crate::cli::StatusArgs;
use crate::config::Context;
use crate::error::Result;
use crate::format::{ScanOutput, StatusSummary, format_issue_line, format_status_summary};

use super::{print_json, report_skipped};

/// Execute the status command.
///
/// # Errors
///
/// Returns an error if the workspace cannot be read.
pub fn execute(args: &StatusArgs, ctx: &Context) -> Result<()> {
    match args.pattern.as_deref() {
        Some(pattern) => execute_filtered(pattern, ctx),
        None => execute_summary(ctx),
    }
}

fn execute_summary(ctx: &Context) -> Result<()> {
    let workspace = ctx.store.workspace();
    let is_project = workspace.is_project();
    let count = if is_project { ctx.store.count()? } else { 0 };

    if ctx.json {
        return print_json(&StatusSummary {
            project: is_project,
            path: workspace.path().display().to_string(),
            issues: count,
        });
    }

    println!("{}", format_status_summary(is_project, count));
    Ok(())
}

fn execute_filtered(pattern: &str, ctx: &Context) -> Result<()> {
    let scan = ctx.store.find_by_prefix(pattern)?;
    report_skipped(&scan);

    if ctx.json {
        return print_json(&ScanOutput::from(&scan));
    }

    for issue in &scan.issues {
        println!("{}", format_issue_line(issue));
    }
    Ok(())
}
