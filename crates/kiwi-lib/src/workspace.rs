//! Workspace location.
//!
//! The workspace is the hidden `.kiwi` directory under the working
//! directory. It is resolved once and handed to the store; nothing here
//! caches process-wide state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Name of the workspace directory.
pub const WORKSPACE_DIR: &str = ".kiwi";

/// A resolved workspace directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    /// Resolve `<cwd>/.kiwi`.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the current directory cannot be read.
    pub fn discover() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::in_dir(cwd))
    }

    /// Workspace under an explicit project root.
    #[must_use]
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        Self::at(root.as_ref().join(WORKSPACE_DIR))
    }

    /// Workspace at an exact directory path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the workspace directory exists.
    #[must_use]
    pub fn is_project(&self) -> bool {
        self.path.is_dir()
    }

    /// Create the workspace directory if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory cannot be created, including when a
    /// regular file already occupies the path.
    pub fn initialize(&self) -> Result<()> {
        if self.is_project() {
            return Ok(());
        }
        if self.path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", self.path.display()),
            )
            .into());
        }
        debug!(path = %self.path.display(), "creating workspace");
        fs::create_dir_all(&self.path)?;
        Ok(())
    }

    /// Path of the record file for `id`.
    #[must_use]
    pub fn record_path(&self, id: &str) -> PathBuf {
        self.path.join(id)
    }
}
