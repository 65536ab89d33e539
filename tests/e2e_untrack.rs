mod common;

use common::cli::{KiwiWorkspace, run_kiwi, run_kiwi_with_stdin};

#[test]
fn e2e_untrack_confirmed_removes_project() {
    let workspace = KiwiWorkspace::new();
    run_kiwi(&workspace, ["add", "first"], "add_1");
    run_kiwi(&workspace, ["add", "second"], "add_2");

    let untrack = run_kiwi_with_stdin(&workspace, ["untrack"], "Y\n", "untrack_yes");
    assert!(untrack.status.success(), "untrack failed: {}", untrack.stderr);
    assert!(untrack.stderr.contains("Are you sure? (Y/N): "));
    assert_eq!(untrack.stdout.trim(), "There is no longer a project here.");
    assert!(!workspace.kiwi_dir().exists());

    let status = run_kiwi(&workspace, ["status"], "status_after");
    assert_eq!(status.stdout.trim(), "There is no project here yet.");
}

#[test]
fn e2e_untrack_declined_keeps_project() {
    let workspace = KiwiWorkspace::new();
    run_kiwi(&workspace, ["add", "keep"], "add");

    for (answer, label) in [("N\n", "untrack_no"), ("y\n", "untrack_lower"), ("", "untrack_eof")] {
        let untrack = run_kiwi_with_stdin(&workspace, ["untrack"], answer, label);
        assert!(untrack.status.success(), "untrack failed: {}", untrack.stderr);
        assert_eq!(untrack.stdout.trim(), "Nothing removed.");
        assert!(workspace.kiwi_dir().is_dir());
    }

    let status = run_kiwi(&workspace, ["status"], "status_after");
    assert_eq!(
        status.stdout.trim(),
        "There is a project here, tracking 1 issues."
    );
}

#[test]
fn e2e_untrack_without_project_fails() {
    let workspace = KiwiWorkspace::new();
    let untrack = run_kiwi_with_stdin(&workspace, ["untrack"], "Y\n", "untrack_none");
    assert_eq!(untrack.status.code(), Some(3));
    assert!(!untrack.stderr.contains("Are you sure?"));
}
