mod common;

use common::cli::{KiwiWorkspace, parse_issue_id, run_kiwi, run_kiwi_with_env, run_kiwi_with_stdin};
use predicates::prelude::*;

#[test]
fn e2e_add_resolve_list() {
    let workspace = KiwiWorkspace::new();

    let add = run_kiwi(&workspace, ["add", "fix", "login", "bug"], "add");
    assert!(add.status.success(), "add failed: {}", add.stderr);
    let id = parse_issue_id(&add.stdout);
    assert_eq!(id.len(), 64, "unexpected id in: {}", add.stdout);
    assert!(add.stdout.contains("State: UNRESOLVED"));
    assert!(add.stdout.contains("User:  tester"));
    assert!(add.stdout.contains("Text:  fix login bug"));
    assert!(workspace.kiwi_dir().join(&id).is_file());

    let resolve = run_kiwi(&workspace, ["resolve", &id[..8]], "resolve");
    assert!(resolve.status.success(), "resolve failed: {}", resolve.stderr);
    assert_eq!(resolve.stdout.trim(), format!("{id} RESOLVED"));

    let list = run_kiwi(&workspace, ["list"], "list");
    assert!(list.status.success(), "list failed: {}", list.stderr);
    let lines: Vec<&str> = list.stdout.lines().collect();
    assert_eq!(lines, vec![format!("{id} RESOLVED").as_str()]);
}

#[test]
fn e2e_resolve_twice_is_idempotent() {
    let workspace = KiwiWorkspace::new();
    let add = run_kiwi(&workspace, ["add", "flaky", "test"], "add");
    let id = parse_issue_id(&add.stdout);

    let first = run_kiwi(&workspace, ["resolve", &id], "resolve_1");
    let second = run_kiwi(&workspace, ["resolve", &id], "resolve_2");
    assert!(first.status.success());
    assert!(second.status.success(), "second resolve failed: {}", second.stderr);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn e2e_empty_add_is_rejected_without_creating_project() {
    let workspace = KiwiWorkspace::new();

    let add = run_kiwi(&workspace, ["add"], "add_empty");
    assert_eq!(add.status.code(), Some(4), "stderr: {}", add.stderr);
    assert!(add.stdout.is_empty());
    assert!(!workspace.kiwi_dir().exists());

    let blank = run_kiwi(&workspace, ["add", "   "], "add_blank");
    assert_eq!(blank.status.code(), Some(4));
    assert!(!workspace.kiwi_dir().exists());
}

#[test]
fn e2e_info_shows_created_time() {
    let workspace = KiwiWorkspace::new();
    let add = run_kiwi(&workspace, ["add", "crash", "on", "save"], "add");
    let id = parse_issue_id(&add.stdout);

    let info = run_kiwi(&workspace, ["info", &id[..5]], "info");
    assert!(info.status.success(), "info failed: {}", info.stderr);
    assert!(info.stdout.starts_with(&format!("Issue: {id}\n")));
    assert!(info.stdout.contains("Text:  crash on save"));
    assert!(predicate::str::is_match(r"Created: \d{4}-\d{2}-\d{2}T")
        .unwrap()
        .eval(&info.stdout));
}

#[test]
fn e2e_update_with_arguments() {
    let workspace = KiwiWorkspace::new();
    let add = run_kiwi(&workspace, ["add", "old", "text"], "add");
    let id = parse_issue_id(&add.stdout);

    let update = run_kiwi(&workspace, ["update", &id, "new", "text"], "update");
    assert!(update.status.success(), "update failed: {}", update.stderr);
    assert!(update.stdout.contains("Text:  new text"));

    let info = run_kiwi(&workspace, ["info", &id], "info");
    assert!(info.stdout.contains("Text:  new text"));
    assert!(info.stdout.contains("State: UNRESOLVED"));
}

#[test]
fn e2e_update_reads_stdin() {
    let workspace = KiwiWorkspace::new();
    let add = run_kiwi(&workspace, ["add", "terse"], "add");
    let id = parse_issue_id(&add.stdout);

    let update = run_kiwi_with_stdin(
        &workspace,
        ["update", &id],
        "a longer description\nover two lines\n",
        "update_stdin",
    );
    assert!(update.status.success(), "update failed: {}", update.stderr);
    assert!(update.stderr.contains("Description: terse"));
    assert!(update.stdout.contains("Text:  a longer description\nover two lines"));
}

#[test]
fn e2e_update_with_empty_stdin_is_rejected() {
    let workspace = KiwiWorkspace::new();
    let add = run_kiwi(&workspace, ["add", "keep", "me"], "add");
    let id = parse_issue_id(&add.stdout);

    let update = run_kiwi_with_stdin(&workspace, ["update", &id], "\n", "update_empty");
    assert_eq!(update.status.code(), Some(4));

    let info = run_kiwi(&workspace, ["info", &id], "info");
    assert!(info.stdout.contains("Text:  keep me"));
}

#[test]
fn e2e_unknown_id_exits_not_found() {
    let workspace = KiwiWorkspace::new();
    run_kiwi(&workspace, ["add", "something"], "add");

    let resolve = run_kiwi(&workspace, ["resolve", "zzzz"], "resolve_missing");
    assert_eq!(resolve.status.code(), Some(3));
    assert!(resolve.stderr.contains("No issue matches 'zzzz'"));
}

#[test]
fn e2e_user_prefers_username() {
    let workspace = KiwiWorkspace::new();
    let add = run_kiwi_with_env(
        &workspace,
        ["add", "from", "windows"],
        [("USERNAME", "winuser")],
        "add_username",
    );
    assert!(add.stdout.contains("User:  winuser"));
}

#[test]
fn e2e_list_empty_and_json() {
    let workspace = KiwiWorkspace::new();

    let empty = run_kiwi(&workspace, ["list"], "list_empty");
    assert!(empty.status.success());
    assert_eq!(empty.stdout.trim(), "No issues found.");

    let add = run_kiwi(&workspace, ["add", "json", "please"], "add");
    let id = parse_issue_id(&add.stdout);

    let list = run_kiwi(&workspace, ["list", "--json"], "list_json");
    assert!(list.status.success(), "list failed: {}", list.stderr);
    let issues: serde_json::Value = serde_json::from_str(&list.stdout).expect("valid json");
    let issues = issues.as_array().expect("array");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["id"], id.as_str());
    assert_eq!(issues[0]["state"], "unresolved");
    assert_eq!(issues[0]["reported_by"], "tester");
}

#[test]
fn e2e_json_error_envelope() {
    let workspace = KiwiWorkspace::new();
    let info = run_kiwi_with_env(
        &workspace,
        ["info", "abc", "--json"],
        [("RUST_LOG", "off")],
        "info_json_missing",
    );
    assert_eq!(info.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_str(info.stderr.trim()).expect("json error");
    assert_eq!(err["error"]["code"], "ISSUE_NOT_FOUND");
}
