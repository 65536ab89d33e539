#![allow(dead_code)]

pub mod cli;

use kiwi_lib::{IdGenerator, Issue, IssueState, IssueStore, Workspace};

/// Write an issue with a chosen id straight into a project root.
pub fn seed_issue(root: &std::path::Path, id: &str, text: &str) -> Issue {
    let store = IssueStore::new(Workspace::in_dir(root), "seeder", IdGenerator::system());
    let issue = Issue::from_parts(id, text, IssueState::Unresolved, "seeder", chrono::Utc::now());
    store.save(&issue).expect("seed issue");
    issue
}
