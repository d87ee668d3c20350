// tests/cli_exit_status.rs

//! Runs the `devtask` binary against a `Devtask.toml` whose tasks are small
//! shell scripts, checking exit status and what actually ran.

#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Every step touches `ran_<name>` in its working dir; `lint` fails the way
/// clippy would.
const SCRIPTED_CONFIG: &str = r#"
[task.format]
program = "sh"
args = ["-c", "touch ran_format"]

[task.check]
program = "sh"
args = ["-c", "touch ran_check"]

[task.lint]
program = "sh"
args = ["-c", "echo 'warning: unused variable: `x`' >&2; exit 1"]

[task.test]
program = "sh"
args = ["-c", "touch ran_test"]

[task.build]
program = "sh"
args = ["-c", "touch ran_build"]
"#;

fn devtask(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_devtask"))
        .current_dir(dir)
        .arg("--no-color")
        .args(args)
        .env_remove("DEVTASK_LOG")
        .output()
        .unwrap()
}

fn scripted_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Devtask.toml"), SCRIPTED_CONFIG).unwrap();
    dir
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn passing_check_exits_zero() {
    let dir = scripted_dir();
    let out = devtask(dir.path(), &["check"]);

    assert_eq!(out.status.code(), Some(0), "stdout: {}", stdout(&out));
    assert!(dir.path().join("ran_check").exists());
    assert!(stdout(&out).contains("Fast workspace check completed in"));
}

#[test]
fn failing_lint_exits_one_with_captured_error() {
    let dir = scripted_dir();
    let out = devtask(dir.path(), &["lint"]);

    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.contains("[ERROR] Error:"), "stdout: {text}");
    assert!(text.contains("unused variable"), "stdout: {text}");
}

#[test]
fn rapid_stops_at_lint_and_skips_later_steps() {
    let dir = scripted_dir();
    let out = devtask(dir.path(), &["rapid"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("failed at: Lint"), "stdout: {}", stdout(&out));
    assert!(dir.path().join("ran_format").exists());
    assert!(dir.path().join("ran_check").exists());
    assert!(!dir.path().join("ran_test").exists());
    assert!(!dir.path().join("ran_build").exists());
}

#[test]
fn dry_run_prints_plan_without_running_anything() {
    let dir = scripted_dir();
    let out = devtask(dir.path(), &["--dry-run", "rapid"]);

    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("steps (5, fail-fast)"), "stdout: {text}");
    assert!(text.contains("3. Lint: sh -c"), "stdout: {text}");

    let ran: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("ran_"))
        .collect();
    assert!(ran.is_empty(), "dry run executed commands: {ran:?}");
}

#[test]
fn invalid_config_exits_one_with_error_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Devtask.toml"),
        "[task.deploy]\nprogram = \"kubectl\"\n",
    )
    .unwrap();

    let out = devtask(dir.path(), &["check"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("devtask error:"), "stderr: {stderr}");
    assert!(stderr.contains("deploy"), "stderr: {stderr}");
}

#[test]
fn working_dir_is_relative_to_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(
        sub.join("Devtask.toml"),
        format!("[config]\nworking_dir = \".\"\n{SCRIPTED_CONFIG}"),
    )
    .unwrap();

    let out = devtask(dir.path(), &["--config", "sub/Devtask.toml", "check"]);

    assert_eq!(out.status.code(), Some(0), "stdout: {}", stdout(&out));
    assert!(sub.join("ran_check").exists());
    assert!(!dir.path().join("ran_check").exists());
}
