//! Untrack command implementation.

use std::io::{self, BufRead, Write};

use kiwi_lib::KiwiError;
use serde::Serialize;

use crate::config::Context;
use crate::error::Result;

use super::print_json;

#[derive(Serialize)]
struct UntrackOutput {
    untracked: bool,
    removed: usize,
}

/// Execute the untrack command, asking for confirmation on stdin.
///
/// # Errors
///
/// Returns `NotInitialized` if there is no project, or `PartialDestroy` if
/// some files could not be removed.
pub fn execute(ctx: &Context) -> Result<()> {
    let stdin = io::stdin();
    execute_with_input(ctx, &mut stdin.lock())
}

/// Execute the untrack command with an explicit input source.
///
/// # Errors
///
/// See [`execute`].
pub fn execute_with_input(ctx: &Context, input: &mut dyn BufRead) -> Result<()> {
    let workspace = ctx.store.workspace();
    if !workspace.is_project() {
        return Err(KiwiError::NotInitialized {
            path: workspace.path().to_path_buf(),
        });
    }

    eprint!("Are you sure? (Y/N): ");
    io::stderr().flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;

    if !is_confirmed(&answer) {
        tracing::info!("untrack declined");
        if ctx.json {
            return print_json(&UntrackOutput {
                untracked: false,
                removed: 0,
            });
        }
        println!("Nothing removed.");
        return Ok(());
    }

    let report = ctx.store.destroy_workspace()?;
    if ctx.json {
        return print_json(&UntrackOutput {
            untracked: true,
            removed: report.removed.len(),
        });
    }
    println!("There is no longer a project here.");
    Ok(())
}

/// Only an answer starting with an upper-case `Y` confirms.
#[must_use]
pub fn is_confirmed(answer: &str) -> bool {
    answer.starts_with('Y')
}
