//! Core data types for kiwi-lib.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue lifecycle state.
///
/// `Unresolved` is the initial state and `Resolved` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    #[default]
    Unresolved,
    Resolved,
}

impl IssueState {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::Resolved => "resolved",
        }
    }

    /// Upper-case label used in listings (`UNRESOLVED`, `RESOLVED`).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unresolved => "UNRESOLVED",
            Self::Resolved => "RESOLVED",
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked issue.
///
/// `id`, `reported_by` and `created_at` are fixed at creation. `text` and
/// `state` only change through [`Issue::set_text`] and [`Issue::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    id: String,
    text: String,
    state: IssueState,
    reported_by: String,
    created_at: DateTime<Utc>,
}

impl Issue {
    /// Assemble an issue from its parts.
    ///
    /// Used by the store when creating and by the record codec when decoding;
    /// no validation happens here.
    #[must_use]
    pub fn from_parts(
        id: impl Into<String>,
        text: impl Into<String>,
        state: IssueState,
        reported_by: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            state,
            reported_by: reported_by.into(),
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn state(&self) -> IssueState {
        self.state
    }

    #[must_use]
    pub fn reported_by(&self) -> &str {
        &self.reported_by
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Mark the issue resolved. Resolving twice is a no-op.
    ///
    /// Returns `true` if the state changed.
    pub fn resolve(&mut self) -> bool {
        let changed = !self.state.is_terminal();
        self.state = IssueState::Resolved;
        changed
    }
}
