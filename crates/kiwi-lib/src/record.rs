//! On-disk record format for a single issue.
//!
//! Each record is a YAML mapping carrying an explicit `schema_version`.
//! Decoding fails closed: unknown fields, missing fields, unknown states,
//! unsupported versions and id/filename mismatches are all rejected.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{KiwiError, Result};
use crate::model::{Issue, IssueState};

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct IssueRecord {
    schema_version: u32,
    id: String,
    text: String,
    state: IssueState,
    reported_by: String,
    created_at: DateTime<Utc>,
}

/// Encode an issue as a YAML record.
///
/// # Errors
///
/// Returns `Yaml` if serialization fails.
pub fn encode(issue: &Issue) -> Result<String> {
    let record = IssueRecord {
        schema_version: SCHEMA_VERSION,
        id: issue.id().to_string(),
        text: issue.text().to_string(),
        state: issue.state(),
        reported_by: issue.reported_by().to_string(),
        created_at: issue.created_at(),
    };
    Ok(serde_yaml::to_string(&record)?)
}

/// Decode a record read from `path`.
///
/// The record's `id` must equal the file name.
///
/// # Errors
///
/// Returns `UnsupportedSchema` for a version other than [`SCHEMA_VERSION`],
/// and `MalformedRecord` for anything else that does not decode cleanly.
pub fn decode(path: &Path, contents: &str) -> Result<Issue> {
    let malformed = |reason: String| KiwiError::MalformedRecord {
        path: path.to_path_buf(),
        reason,
    };

    // Check the version before the strict decode so a newer schema reports
    // as unsupported rather than as unknown fields.
    let value: serde_yaml::Value =
        serde_yaml::from_str(contents).map_err(|e| malformed(e.to_string()))?;
    let version = value
        .get("schema_version")
        .and_then(serde_yaml::Value::as_u64)
        .ok_or_else(|| malformed("missing schema_version".to_string()))?;
    if version != u64::from(SCHEMA_VERSION) {
        return Err(KiwiError::UnsupportedSchema {
            path: path.to_path_buf(),
            found: u32::try_from(version).unwrap_or(u32::MAX),
        });
    }

    let record: IssueRecord =
        serde_yaml::from_value(value).map_err(|e| malformed(e.to_string()))?;

    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if name != record.id {
            return Err(malformed(format!(
                "id '{}' does not match file name '{name}'",
                record.id
            )));
        }
    }

    Ok(Issue::from_parts(
        record.id,
        record.text,
        record.state,
        record.reported_by,
        record.created_at,
    ))
}
