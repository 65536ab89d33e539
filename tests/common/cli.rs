use assert_cmd::Command;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};
use tempfile::TempDir;

#[derive(Debug)]
pub struct KiwiRun {
    pub stdout: String,
    pub stderr: String,
    pub status: std::process::ExitStatus,
    pub duration: Duration,
    pub log_path: PathBuf,
}

pub struct KiwiWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub log_dir: TempDir,
}

impl KiwiWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir");
        let root = temp_dir.path().to_path_buf();
        // Logs live outside the project root so they never show up as records.
        let log_dir = TempDir::new().expect("log dir");
        Self {
            temp_dir,
            root,
            log_dir,
        }
    }

    pub fn kiwi_dir(&self) -> PathBuf {
        self.root.join(".kiwi")
    }
}

pub fn run_kiwi<I, S>(workspace: &KiwiWorkspace, args: I, label: &str) -> KiwiRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_kiwi_full(
        workspace,
        args,
        std::iter::empty::<(String, String)>(),
        None,
        label,
    )
}

pub fn run_kiwi_with_stdin<I, S>(
    workspace: &KiwiWorkspace,
    args: I,
    stdin: &str,
    label: &str,
) -> KiwiRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_kiwi_full(
        workspace,
        args,
        std::iter::empty::<(String, String)>(),
        Some(stdin),
        label,
    )
}

pub fn run_kiwi_with_env<I, S, E, K, V>(
    workspace: &KiwiWorkspace,
    args: I,
    env_vars: E,
    label: &str,
) -> KiwiRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
    E: IntoIterator<Item = (K, V)>,
    K: AsRef<OsStr>,
    V: AsRef<OsStr>,
{
    run_kiwi_full(workspace, args, env_vars, None, label)
}

fn run_kiwi_full<I, S, E, K, V>(
    workspace: &KiwiWorkspace,
    args: I,
    env_vars: E,
    stdin: Option<&str>,
    label: &str,
) -> KiwiRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
    E: IntoIterator<Item = (K, V)>,
    K: AsRef<OsStr>,
    V: AsRef<OsStr>,
{
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kiwi"));
    cmd.current_dir(&workspace.root);
    cmd.args(args);
    cmd.env_remove("USERNAME");
    cmd.env_remove("KIWI_LOG_FILE");
    cmd.env("USER", "tester");
    cmd.env("NO_COLOR", "1");
    cmd.env("RUST_LOG", "kiwi=debug,kiwi_lib=debug");
    cmd.env("RUST_BACKTRACE", "1");
    cmd.envs(env_vars);
    cmd.write_stdin(stdin.unwrap_or(""));

    let start = Instant::now();
    let output = cmd.output().expect("run kiwi");
    let duration = start.elapsed();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    let log_path = workspace.log_dir.path().join(format!("{label}.log"));
    let timestamp = SystemTime::now();
    let log_body = format!(
        "label: {label}\nstarted: {:?}\nduration: {:?}\nstatus: {}\nargs: {:?}\ncwd: {}\n\nstdout:\n{}\n\nstderr:\n{}\n",
        timestamp,
        duration,
        output.status,
        cmd.get_args().collect::<Vec<_>>(),
        workspace.root.display(),
        stdout,
        stderr
    );
    fs::write(&log_path, log_body).expect("write log");

    KiwiRun {
        stdout,
        stderr,
        status: output.status,
        duration,
        log_path,
    }
}

/// Pull the id out of the `Issue: <id>` line printed by `add`.
pub fn parse_issue_id(stdout: &str) -> String {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Issue: "))
        .unwrap_or("")
        .trim()
        .to_string()
}
