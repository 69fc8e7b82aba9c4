//! Integration tests for the utilkit CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const HELLO_SHA256: &str = "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03";
const A_SHA256: &str = "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb";

/// Binary with the styling environment cleared, run inside `dir` so no
/// stray `.utilkit.toml` is picked up
#[allow(deprecated)]
fn get_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("utilkit").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("UTILKIT_SGR")
        .env_remove("UTILKIT_FORCE_SGR")
        .env_remove("UTILKIT_FORCE_PREFIX")
        .env_remove("UTILKIT_IS_ERROR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_hash_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("hello.txt");
    fs::write(&file, "hello\n").unwrap();

    get_cmd(&temp_dir)
        .args(["hash", "hello.txt"])
        .assert()
        .success()
        .stdout(format!("{}  hello.txt\n", HELLO_SHA256));
}

#[test]
fn test_hash_directory_is_sorted() {
    let temp_dir = TempDir::new().unwrap();
    let tree = temp_dir.path().join("tree");
    fs::create_dir_all(tree.join("sub")).unwrap();
    fs::write(tree.join("sub").join("a.txt"), "a").unwrap();
    fs::write(tree.join("b.txt"), "hello\n").unwrap();

    let output = get_cmd(&temp_dir)
        .args(["hash", "tree"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(HELLO_SHA256));
    assert!(lines[0].ends_with("b.txt"));
    assert!(lines[1].starts_with(A_SHA256));
    assert!(lines[1].ends_with("a.txt"));
}

#[test]
fn test_hash_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["hash", "missing.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_run_tees_output_and_reports() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["run", "--", "sh", "-c", "echo out; echo err >&2"])
        .assert()
        .success()
        .stdout("out\n")
        .stderr(predicate::str::contains("err\n"))
        .stderr(predicate::str::contains("Finished in "))
        .stderr(predicate::str::contains("(exit code 0)"));
}

#[test]
fn test_run_propagates_exit_code() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["run", "--", "sh", "-c", "exit 3"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed in "));
}

#[test]
fn test_run_json_quiet() {
    let temp_dir = TempDir::new().unwrap();

    let output = get_cmd(&temp_dir)
        .args(["run", "--json", "--quiet", "--env", "GREETING=hi", "--"])
        .args(["sh", "-c", "echo $GREETING"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["stdout"], "hi\n");
    assert_eq!(json["stderr"], "");
    assert_eq!(json["exit_code"], 0);
    assert!(json["pid"].as_u64().unwrap() > 0);
    assert!(json["elapsed"].as_i64().unwrap() > 0);
}

#[test]
fn test_run_repeat_reports_statistics() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["run", "-q", "-n", "3", "--", "true"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Finished 3 runs in "))
        .stderr(predicate::str::contains("min "))
        .stderr(predicate::str::contains("avg "));
}

#[test]
fn test_run_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("inner")).unwrap();
    fs::write(temp_dir.path().join("inner").join("marker"), "").unwrap();

    get_cmd(&temp_dir)
        .args(["run", "--cwd", "inner", "--", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marker"));
}

#[test]
fn test_run_unknown_program_fails() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["run", "--", "utilkit-no-such-program"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("utilkit-no-such-program"));
}

#[test]
fn test_header_without_terminal_is_plain() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["header", "--padding", "=", "--code", "bold", "Title"])
        .assert()
        .success()
        .stdout("Title\n");
}

#[test]
fn test_header_force_sgr_flag() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["header", "--force-sgr", "--code", "bold", "--code", "red", "Title"])
        .assert()
        .success()
        .stdout("\x1b[1m\x1b[31mTitle\x1b[0m\n");
}

#[test]
fn test_header_force_sgr_environment() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .env("UTILKIT_FORCE_SGR", "1")
        .args(["header", "--code", "underline", "Title"])
        .assert()
        .success()
        .stdout("\x1b[4mTitle\x1b[0m\n");
}

#[test]
fn test_header_to_stderr() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["header", "--stderr", "Title"])
        .assert()
        .success()
        .stdout("")
        .stderr("Title\n");
}

#[test]
fn test_header_reads_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".utilkit.toml"),
        "[term]\nforce_sgr = true\n\n[header]\ncodes = [\"green\"]\n",
    )
    .unwrap();

    get_cmd(&temp_dir)
        .args(["header", "Title"])
        .assert()
        .success()
        .stdout("\x1b[32mTitle\x1b[0m\n");
}

#[test]
fn test_explicit_config_with_invalid_toml_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("broken.toml"), "[term\n").unwrap();

    get_cmd(&temp_dir)
        .args(["--config", "broken.toml", "header", "Title"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("broken.toml"));
}

#[test]
fn test_unknown_style_code_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["header", "--code", "sparkly", "Title"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("sparkly"));
}
