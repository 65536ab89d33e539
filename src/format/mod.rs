//! Output formatting for `kiwi`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//!
//! # JSON Output Types
//!
//! - [`StatusSummary`] - project presence and record counts (status)
//! - [`ScanOutput`] - issues plus skipped-record count (status with a pattern)

mod output;
mod text;

pub use output::{ScanOutput, StatusSummary};
pub use text::{
    format_issue_detail, format_issue_info, format_issue_line, format_skipped_warning,
    format_status_summary,
};
