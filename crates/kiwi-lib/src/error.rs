//! Error types for `kiwi-lib`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for kiwi-lib operations.
#[derive(Error, Debug)]
pub enum KiwiError {
    // === Issue Errors ===
    /// No issue matched the given id or prefix.
    #[error("No issue matches '{id}'")]
    IssueNotFound { id: String },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    // === Workspace Errors ===
    /// No `.kiwi` directory at the expected location.
    #[error("There is no project here: {}", path.display())]
    NotInitialized { path: PathBuf },

    /// Some files survived a workspace destroy.
    #[error(
        "Workspace only partially removed: {} removed, {} failed",
        removed.len(),
        failed.len()
    )]
    PartialDestroy {
        removed: Vec<PathBuf>,
        failed: Vec<(PathBuf, String)>,
    },

    // === Record Errors ===
    /// A record file exists but does not decode to an issue.
    #[error("Malformed record {}: {reason}", path.display())]
    MalformedRecord { path: PathBuf, reason: String },

    /// A record declares a schema version this build cannot read.
    #[error("Unsupported record schema {found} in {}", path.display())]
    UnsupportedSchema { path: PathBuf, found: u32 },

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification callers use to decide how to report an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input from the user; nothing was written.
    Validation,
    /// A lookup missed.
    NotFound,
    /// File system or record-level failure.
    Io,
}

impl KiwiError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::IssueNotFound { id: id.into() }
    }

    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::IssueNotFound { .. } | Self::NotInitialized { .. } => ErrorCategory::NotFound,
            Self::PartialDestroy { .. }
            | Self::MalformedRecord { .. }
            | Self::UnsupportedSchema { .. }
            | Self::Io(_)
            | Self::Yaml(_)
            | Self::Json(_) => ErrorCategory::Io,
        }
    }
}

/// Result type using `KiwiError`.
pub type Result<T> = std::result::Result<T, KiwiError>;
