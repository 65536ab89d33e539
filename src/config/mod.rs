//! Runtime configuration for `kiwi`.
//!
//! There is no config file. Everything comes from the process:
//! - Workspace: `.kiwi` under the current working directory
//! - User: `USERNAME`, then `USER`, then `unknown`
//! - Output mode: the global `--json` flag
//!
//! The [`Context`] is built once in `main` and passed to every command.

use kiwi_lib::{IdGenerator, IssueStore, Workspace};

use crate::error::Result;

/// Environment variables consulted for the user identity, in order.
pub const USER_ENV_VARS: &[&str] = &["USERNAME", "USER"];

/// Identity used when no user variable is set.
pub const UNKNOWN_USER: &str = "unknown";

/// Options from the command line that affect every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub json: bool,
}

/// Everything a command needs: the store and the output mode.
#[derive(Debug)]
pub struct Context {
    pub store: IssueStore,
    pub json: bool,
}

impl Context {
    /// Resolve the workspace and user from the running process.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_env(overrides: CliOverrides) -> Result<Self> {
        let workspace = Workspace::discover()?;
        let user = resolve_user();
        tracing::debug!(workspace = %workspace.path().display(), %user, "resolved context");
        Ok(Self::new(workspace, user, overrides))
    }

    #[must_use]
    pub fn new(workspace: Workspace, user: impl Into<String>, overrides: CliOverrides) -> Self {
        Self {
            store: IssueStore::new(workspace, user, IdGenerator::system()),
            json: overrides.json,
        }
    }
}

/// Resolve the current user from the environment.
#[must_use]
pub fn resolve_user() -> String {
    resolve_user_with(|key| std::env::var(key).ok())
}

/// Resolve the current user through `lookup`, trying [`USER_ENV_VARS`] in
/// order and skipping blank values.
#[must_use]
pub fn resolve_user_with(lookup: impl Fn(&str) -> Option<String>) -> String {
    USER_ENV_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}
