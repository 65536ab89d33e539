//! Text formatting functions for `kiwi`.
//!
//! Plain text, no colour. Labels are padded so values line up:
//!
//! ```text
//! Issue: <id>
//! State: UNRESOLVED
//! User:  <reported_by>
//! Text:  <text>
//! ```

use kiwi_lib::Issue;

/// One-line summary: `{id} {STATE}`.
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    format!("{} {}", issue.id(), issue.state().label())
}

/// Full record, as printed by `add` and `update`.
#[must_use]
pub fn format_issue_detail(issue: &Issue) -> String {
    format!(
        "Issue: {}\nState: {}\nUser:  {}\nText:  {}",
        issue.id(),
        issue.state().label(),
        issue.reported_by(),
        issue.text(),
    )
}

/// Full record plus creation time, as printed by `info`.
#[must_use]
pub fn format_issue_info(issue: &Issue) -> String {
    format!(
        "{}\nCreated: {}",
        format_issue_detail(issue),
        issue.created_at().to_rfc3339()
    )
}

/// Project presence line for `status` without a pattern.
#[must_use]
pub fn format_status_summary(is_project: bool, count: usize) -> String {
    if is_project {
        format!("There is a project here, tracking {count} issues.")
    } else {
        "There is no project here yet.".to_string()
    }
}

/// Stderr note shown when a scan skipped unreadable records.
#[must_use]
pub fn format_skipped_warning(skipped: usize) -> String {
    format!("warning: skipped {skipped} unreadable record(s)")
}
