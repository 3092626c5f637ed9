//! Integration tests for the `topsis rank` command.

use std::process::{Command, Output};

use tempfile::TempDir;

fn topsis(dir: &TempDir, args: &[&str]) -> Output {
    topsis_with_env(dir, args, &[])
}

fn topsis_with_env(dir: &TempDir, args: &[&str], env: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_topsis"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .envs(env.iter().copied())
        .args(args)
        .output()
        .unwrap()
}

fn sample(dir: &TempDir) {
    std::fs::write(
        dir.path().join("data.csv"),
        "Model,Price,Storage,Camera,Looks\nM1,250,16,12,5\nM2,200,16,8,3\nM3,300,32,16,4\nM4,275,32,8,4\nM5,225,16,16,2\n",
    )
    .unwrap();
}

#[test]
fn rank_writes_result_and_reports_success() {
    let dir = TempDir::new().unwrap();
    sample(&dir);

    let output = topsis(&dir, &["rank", "data.csv", "1,1,1,1", "-,+,+,+", "result.csv"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim(),
        "TOPSIS result successfully saved to result.csv"
    );

    let written = std::fs::read_to_string(dir.path().join("result.csv")).unwrap();
    assert!(written.starts_with("Model,Price,Storage,Camera,Looks,Topsis Score,Rank\n"));
    assert_eq!(written.lines().count(), 6);
}

#[test]
fn invalid_impact_exits_with_error_message() {
    let dir = TempDir::new().unwrap();
    sample(&dir);

    let output = topsis(&dir, &["rank", "data.csv", "1,1,1,1", "+,+,x,+", "result.csv"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: "));
    assert!(stderr.contains("'x'"));
    assert!(!dir.path().join("result.csv").exists());
}

#[test]
fn missing_input_exits_with_error_message() {
    let dir = TempDir::new().unwrap();

    let output = topsis(&dir, &["rank", "absent.csv", "1,1", "+,+", "result.csv"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Input file not found"));
}

#[test]
fn missing_argument_exits_with_one_line_usage() {
    let dir = TempDir::new().unwrap();
    sample(&dir);

    let output = topsis(&dir, &["rank", "data.csv", "1,1,1,1", "+,+,+,+"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "stderr: {}", stderr);
    assert!(stderr.starts_with("Error: "));
    assert!(stderr.contains("<OUTPUT>"));
    assert!(stderr.contains("Usage: topsis rank"));
}

#[test]
fn help_still_exits_successfully() {
    let dir = TempDir::new().unwrap();

    let output = topsis(&dir, &["rank", "--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("<WEIGHTS>"));
}

#[test]
fn rank_ignores_server_configuration() {
    let dir = TempDir::new().unwrap();
    sample(&dir);
    std::fs::write(dir.path().join(".env"), "TOPSIS__SERVER__REQUEST_TIMEOUT_SECS=soon\n").unwrap();

    let output = topsis_with_env(
        &dir,
        &["rank", "data.csv", "1,1,1,1", "-,+,+,+", "result.csv"],
        &[("TOPSIS__SERVER__PORT", "abc")],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(dir.path().join("result.csv").exists());
}
