//! Error types and handling for `kiwi`.
//!
//! The store's [`KiwiError`] is the error type for every command. This module
//! adds stable error codes, exit codes and the structured rendering used by
//! `main` (human text, or JSON with `--json`).

use serde::Serialize;
use serde_json::{Value, json};

pub use kiwi_lib::{ErrorCategory, KiwiError, Result};

/// Machine-readable error codes.
///
/// Format: `SCREAMING_SNAKE_CASE` for easy parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    // === Lookup Errors (exit code 3) ===
    /// No issue matched the id or prefix
    IssueNotFound,
    /// No workspace in the current directory
    NotInitialized,

    // === Validation Errors (exit code 4) ===
    /// Field validation failed
    ValidationFailed,

    // === Record Errors (exit code 6) ===
    /// Record did not decode
    MalformedRecord,
    /// Record schema newer than this build
    UnsupportedSchema,

    // === I/O Errors (exit code 8) ===
    /// File I/O error
    IoError,
    /// Destroy left files behind
    PartialDestroy,
    /// YAML serialization error
    YamlError,
    /// JSON serialization error
    JsonError,
}

impl ErrorCode {
    /// Get the string representation for JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IssueNotFound => "ISSUE_NOT_FOUND",
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::MalformedRecord => "MALFORMED_RECORD",
            Self::UnsupportedSchema => "UNSUPPORTED_SCHEMA",
            Self::IoError => "IO_ERROR",
            Self::PartialDestroy => "PARTIAL_DESTROY",
            Self::YamlError => "YAML_ERROR",
            Self::JsonError => "JSON_ERROR",
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::IssueNotFound | Self::NotInitialized => 3,
            Self::ValidationFailed => 4,
            Self::MalformedRecord | Self::UnsupportedSchema => 6,
            Self::IoError | Self::PartialDestroy | Self::YamlError | Self::JsonError => 8,
        }
    }

    #[must_use]
    pub const fn from_error(err: &KiwiError) -> Self {
        match err {
            KiwiError::IssueNotFound { .. } => Self::IssueNotFound,
            KiwiError::NotInitialized { .. } => Self::NotInitialized,
            KiwiError::Validation { .. } => Self::ValidationFailed,
            KiwiError::MalformedRecord { .. } => Self::MalformedRecord,
            KiwiError::UnsupportedSchema { .. } => Self::UnsupportedSchema,
            KiwiError::PartialDestroy { .. } => Self::PartialDestroy,
            KiwiError::Io(_) => Self::IoError,
            KiwiError::Yaml(_) => Self::YamlError,
            KiwiError::Json(_) => Self::JsonError,
        }
    }
}

/// Structured error ready for output.
#[derive(Debug, Clone)]
pub struct StructuredError {
    pub code: ErrorCode,
    pub message: String,
    pub hint: Option<String>,
    pub context: Option<Value>,
}

impl StructuredError {
    #[must_use]
    pub fn from_error(err: &KiwiError) -> Self {
        Self {
            code: ErrorCode::from_error(err),
            message: err.to_string(),
            hint: hint_for(err),
            context: context_for(err),
        }
    }

    /// JSON envelope: `{"error": {"code", "message", "hint", "context"}}`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "error": {
                "code": self.code.as_str(),
                "message": self.message,
                "hint": self.hint,
                "context": self.context,
            }
        })
    }

    /// Format for human-readable output.
    #[must_use]
    pub fn to_human(&self, color: bool) -> String {
        let mut output = String::new();

        if color {
            output.push_str("\x1b[31mError:\x1b[0m ");
        } else {
            output.push_str("Error: ");
        }
        output.push_str(&self.message);

        if let Some(hint) = &self.hint {
            output.push('\n');
            if color {
                output.push_str("\x1b[33mHint:\x1b[0m ");
            } else {
                output.push_str("Hint: ");
            }
            output.push_str(hint);
        }

        output
    }
}

fn hint_for(err: &KiwiError) -> Option<String> {
    match err {
        KiwiError::IssueNotFound { .. } => {
            Some("Run 'kiwi list' to see available issues.".to_string())
        }
        KiwiError::NotInitialized { .. } => {
            Some("Run 'kiwi add <text>' to start tracking issues here.".to_string())
        }
        KiwiError::Validation { field, .. } if field == "text" => {
            Some("Add text next time.".to_string())
        }
        KiwiError::MalformedRecord { .. } => {
            Some("Fix or remove the record file; 'kiwi list' skips it.".to_string())
        }
        _ => match err.category() {
            ErrorCategory::Io => {
                Some("Check that .kiwi/ and its files are readable and writable.".to_string())
            }
            ErrorCategory::Validation | ErrorCategory::NotFound => None,
        },
    }
}

fn context_for(err: &KiwiError) -> Option<Value> {
    match err {
        KiwiError::IssueNotFound { id } => Some(json!({ "id": id })),
        KiwiError::NotInitialized { path }
        | KiwiError::MalformedRecord { path, .. }
        | KiwiError::UnsupportedSchema { path, .. } => {
            Some(json!({ "path": path.display().to_string() }))
        }
        KiwiError::PartialDestroy { removed, failed } => Some(json!({
            "removed": removed.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            "failed": failed
                .iter()
                .map(|(p, reason)| json!({ "path": p.display().to_string(), "reason": reason }))
                .collect::<Vec<_>>(),
        })),
        _ => None,
    }
}
