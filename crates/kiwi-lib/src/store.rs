//! File-per-issue store.
//!
//! Every issue is one record file inside the workspace directory, named by
//! the issue id. Scans return records sorted by id; records that fail to
//! decode are skipped and reported in [`Scan::skipped`].

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{KiwiError, Result};
use crate::id::{IdGenerator, is_valid_id};
use crate::model::{Issue, IssueState};
use crate::record;
use crate::workspace::Workspace;

/// Reject text that is empty once trailing whitespace is removed.
///
/// # Errors
///
/// Returns `Validation` for blank text.
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim_end().is_empty() {
        return Err(KiwiError::validation("text", "cannot be empty"));
    }
    Ok(())
}

/// A record that could not be decoded during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of enumerating records.
#[derive(Debug, Default)]
pub struct Scan {
    /// Decoded issues, sorted by id.
    pub issues: Vec<Issue>,
    /// Records that were present but unreadable.
    pub skipped: Vec<SkippedRecord>,
}

impl Scan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Outcome of a successful workspace destroy.
#[derive(Debug, Default)]
pub struct DestroyReport {
    /// Files removed before the directory itself.
    pub removed: Vec<PathBuf>,
}

/// Issue store over a single workspace directory.
#[derive(Debug)]
pub struct IssueStore {
    workspace: Workspace,
    user: String,
    ids: IdGenerator,
}

impl IssueStore {
    /// Create a store. `user` becomes `reported_by` on new issues.
    #[must_use]
    pub fn new(workspace: Workspace, user: impl Into<String>, ids: IdGenerator) -> Self {
        Self {
            workspace,
            user: user.into(),
            ids,
        }
    }

    #[must_use]
    pub const fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    // ========================================================================
    // Create / Save
    // ========================================================================

    /// Build a new, unsaved issue.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if `text` is empty after trimming trailing
    /// whitespace. Nothing is written either way.
    pub fn create(&self, text: &str) -> Result<Issue> {
        validate_text(text)?;
        let now = self.ids.now();
        let id = self.ids.new_id_at(&self.user, now);
        debug!(%id, "created issue");
        Ok(Issue::from_parts(
            id,
            text,
            IssueState::default(),
            self.user.clone(),
            now,
        ))
    }

    /// Write `issue` to its record, replacing any previous version.
    ///
    /// Initializes the workspace if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the issue id is not a valid id, or `Io` if the
    /// workspace or the record cannot be written.
    pub fn save(&self, issue: &Issue) -> Result<()> {
        if !is_valid_id(issue.id()) {
            return Err(KiwiError::validation("id", "not a valid issue id"));
        }
        self.workspace.initialize()?;

        let contents = record::encode(issue)?;
        let path = self.workspace.record_path(issue.id());
        let tmp_path = self.workspace.record_path(&format!(".{}.tmp", issue.id()));

        fs::write(&tmp_path, contents)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!(id = issue.id(), path = %path.display(), "saved issue");
        Ok(())
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Fetch the record named exactly `id`.
    ///
    /// Returns `None` when no such record exists.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the record cannot be read, or `MalformedRecord` /
    /// `UnsupportedSchema` if it does not decode.
    pub fn get_exact(&self, id: &str) -> Result<Option<Issue>> {
        if !is_valid_id(id) {
            return Ok(None);
        }
        let path = self.workspace.record_path(id);
        if !path.is_file() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        record::decode(&path, &contents).map(Some)
    }

    /// All records whose id starts with `pattern`. An empty pattern matches
    /// everything.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the workspace directory cannot be listed.
    pub fn find_by_prefix(&self, pattern: &str) -> Result<Scan> {
        self.scan(|name| name.starts_with(pattern))
    }

    /// Exact id first, then the first prefix match in id order.
    ///
    /// When several ids share the prefix the lowest one wins; callers wanting
    /// an unambiguous match should pass a longer prefix.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::get_exact`] and [`Self::find_by_prefix`].
    pub fn resolve_one(&self, id_or_prefix: &str) -> Result<Option<Issue>> {
        if let Some(issue) = self.get_exact(id_or_prefix)? {
            return Ok(Some(issue));
        }
        let scan = self.find_by_prefix(id_or_prefix)?;
        if scan.issues.len() > 1 {
            debug!(
                prefix = id_or_prefix,
                candidates = scan.issues.len(),
                "ambiguous prefix, taking first match"
            );
        }
        Ok(scan.issues.into_iter().next())
    }

    /// Every record in the workspace.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the workspace directory cannot be listed.
    pub fn all(&self) -> Result<Scan> {
        self.scan(|_| true)
    }

    /// Number of record files, without decoding them.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the workspace directory cannot be listed.
    pub fn count(&self) -> Result<usize> {
        Ok(self.record_files()?.len())
    }

    // ========================================================================
    // Destroy
    // ========================================================================

    /// Delete every file in the workspace, then the directory.
    ///
    /// Deletion is sequential and best-effort: a failure does not stop the
    /// remaining deletions, and the error lists what was and was not removed.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if there is no workspace, `Io` if it cannot be
    /// listed, or `PartialDestroy` if anything could not be removed.
    pub fn destroy_workspace(&self) -> Result<DestroyReport> {
        let dir = self.workspace.path();
        if !self.workspace.is_project() {
            return Err(KiwiError::NotInitialized {
                path: dir.to_path_buf(),
            });
        }

        let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        entries.sort();

        let mut removed = Vec::new();
        let mut failed = Vec::new();
        for path in entries {
            let result = if path.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            match result {
                Ok(()) => removed.push(path),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to remove record");
                    failed.push((path, e.to_string()));
                }
            }
        }

        if failed.is_empty() {
            if let Err(e) = fs::remove_dir(dir) {
                failed.push((dir.to_path_buf(), e.to_string()));
            }
        }

        if !failed.is_empty() {
            return Err(KiwiError::PartialDestroy { removed, failed });
        }

        debug!(path = %dir.display(), removed = removed.len(), "destroyed workspace");
        Ok(DestroyReport { removed })
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Record files in the workspace as `(name, path)`, sorted by name.
    ///
    /// Hidden entries (in-flight temp files) and directories are ignored.
    fn record_files(&self) -> Result<Vec<(String, PathBuf)>> {
        if !self.workspace.is_project() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(self.workspace.path())? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                warn!(path = %path.display(), "ignoring non-UTF-8 file name");
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            files.push((name, path));
        }
        files.sort();
        Ok(files)
    }

    fn scan(&self, matches: impl Fn(&str) -> bool) -> Result<Scan> {
        let mut scan = Scan::default();
        for (name, path) in self.record_files()? {
            if !matches(&name) {
                continue;
            }
            let decoded = fs::read_to_string(&path)
                .map_err(KiwiError::from)
                .and_then(|contents| record::decode(&path, &contents));
            match decoded {
                Ok(issue) => scan.issues.push(issue),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable record");
                    scan.skipped.push(SkippedRecord {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }
        Ok(scan)
    }
}
