use kiwi_lib::{Issue, Scan};
use serde::Serialize;

/// Project summary for the status view.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSummary {
    pub project: bool,
    pub path: String,
    pub issues: usize,
}

/// Issues from a scan, with the number of unreadable records skipped.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutput<'a> {
    pub issues: &'a [Issue],
    pub skipped: usize,
}

impl<'a> From<&'a Scan> for ScanOutput<'a> {
    fn from(scan: &'a Scan) -> Self {
        Self {
            issues: &scan.issues,
            skipped: scan.skipped.len(),
        }
    }
}
