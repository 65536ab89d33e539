//! Command implementations.
//!
//! Each command resolves what it needs through the store in the shared
//! [`Context`] and prints its own output.

pub mod add;
pub mod info;
pub mod list;
pub mod resolve;
pub mod status;
pub mod untrack;
pub mod update;
pub mod version;

use kiwi_lib::{Issue, KiwiError, Scan};
use serde::Serialize;

use crate::config::Context;
use crate::error::Result;
use crate::format::format_skipped_warning;

/// Look up an issue by id or prefix, turning a miss into `IssueNotFound`.
///
/// # Errors
///
/// Returns `IssueNotFound` if nothing matches, or any store error.
pub fn resolve_issue(ctx: &Context, id_or_prefix: &str) -> Result<Issue> {
    ctx.store
        .resolve_one(id_or_prefix)?
        .ok_or_else(|| KiwiError::not_found(id_or_prefix))
}

/// Print a value as pretty JSON on stdout.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Note skipped records on stderr so they are not silently lost.
pub fn report_skipped(scan: &Scan) {
    if !scan.skipped.is_empty() {
        eprintln!("{}", format_skipped_warning(scan.skipped.len()));
    }
}
