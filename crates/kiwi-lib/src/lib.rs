//! `kiwi-lib` — file-per-issue storage for the kiwi issue tracker.
//!
//! A project is a hidden `.kiwi` directory. Each issue lives in its own
//! YAML record named by the issue id; there is no index or metadata file.
//!
//! # Quick Start
//!
//! ```no_run
//! use kiwi_lib::{IdGenerator, IssueStore, Workspace};
//!
//! let workspace = Workspace::discover().unwrap();
//! let store = IssueStore::new(workspace, "alice", IdGenerator::system());
//!
//! // Create and persist
//! let issue = store.create("fix login bug").unwrap();
//! store.save(&issue).unwrap();
//!
//! // Look up by a short prefix of the id
//! let mut found = store.resolve_one(&issue.id()[..6]).unwrap().unwrap();
//! found.resolve();
//! store.save(&found).unwrap();
//! ```

pub mod error;
pub mod id;
pub mod model;
pub mod record;
pub mod store;
pub mod workspace;

pub use error::{ErrorCategory, KiwiError, Result};
pub use id::{Clock, EntropySource, IdGenerator};
pub use model::{Issue, IssueState};
pub use store::{DestroyReport, IssueStore, Scan, SkippedRecord, validate_text};
pub use workspace::Workspace;
