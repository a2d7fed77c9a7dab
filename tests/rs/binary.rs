//! End-to-end tests running the `calcdemo` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, body).expect("Failed to write config");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_calcdemo"))
        .args(args)
        .output()
        .expect("Failed to run calcdemo")
}

/// Run with the config-directory variables pointed at `home`.
fn run_with_home(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_calcdemo"))
        .args(args)
        .env("XDG_CONFIG_HOME", home)
        .env("HOME", home)
        .output()
        .expect("Failed to run calcdemo")
}

/// Place `calcdemo/config.toml` where the platform config directory resolves
/// when `XDG_CONFIG_HOME` is `home`.
fn write_user_config(home: &Path, body: &str) {
    let dir = home.join("calcdemo");
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    write_config(&dir, body);
}

/// Strip `[<timestamp>] ` and check the timestamp has the `ctime` width.
fn body(line: &str) -> &str {
    assert!(line.starts_with('['), "no timestamp in {line:?}");
    let end = line.find("] ").expect("unterminated timestamp");
    assert_eq!(end - 1, 24, "unexpected timestamp in {line:?}");
    &line[end + 2..]
}

#[cfg(feature = "log-info")]
#[test]
fn default_scenario_logs_results_and_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(dir.path(), "[logging]\nlevel = \"info\"\n");
    let output = run(&["--config", config.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().map(body).collect();
    assert_eq!(
        lines,
        vec![
            "INFO: Starting multi-module application",
            "INFO: 10 + 5 = 15",
            "INFO: 10 - 5 = 5",
            "INFO: 10 * 5 = 50",
            "INFO: 10 / 5 = 2",
            "INFO: 10 / 0 = 0",
            "INFO: Application finished",
        ]
    );

    let stderr = String::from_utf8(output.stderr).unwrap();
    let errors: Vec<&str> = stderr.lines().map(body).collect();
    assert_eq!(
        errors,
        vec!["ERROR: try_divide(10, 0) failed: division by zero (dividend 10)"]
    );
}

#[cfg(feature = "log-debug")]
#[test]
fn debug_level_adds_operation_traces() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(dir.path(), "[logging]\nlevel = \"info\"\n");
    let output = run(&["--config", config.to_str().unwrap(), "--debug"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().map(body).any(|l| l == "DEBUG: add(10, 5)"));
}

#[test]
fn hello_scenario_prints_plain_lines() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(dir.path(), "[demo]\nscenario = \"multi-module\"\n");
    let output = run(&["--config", config.to_str().unwrap(), "hello", "--log-level", "error"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Hello from .cc project!\nTesting .cc file support\n5 + 3 = 8\n"
    );
    assert!(output.stderr.is_empty());
}

#[cfg(feature = "file-logging")]
#[test]
fn log_file_receives_output() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(dir.path(), "[logging]\nlevel = \"error\"\n");
    let log_path = dir.path().join("run.log");
    let output = run(&[
        "--config",
        config.to_str().unwrap(),
        "--log-file",
        log_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    let lines: Vec<&str> = contents.lines().map(body).collect();
    assert_eq!(
        lines,
        vec!["ERROR: try_divide(10, 0) failed: division by zero (dividend 10)"]
    );
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(dir.path(), "[logging\nlevel = ");
    let output = run(&["--config", config.to_str().unwrap(), "mixed"]);
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to parse config"));
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .starts_with("Mixed extensions project test!\n"));
}

#[test]
fn no_arguments_runs_default_demo() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let output = run_with_home(home.path(), &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().map(body).collect();
    if cfg!(feature = "log-info") {
        assert!(lines.contains(&"INFO: Starting multi-module application"));
        assert!(lines.contains(&"INFO: 10 + 5 = 15"));
        assert!(lines.contains(&"INFO: 10 / 0 = 0"));
        assert!(lines.contains(&"INFO: Application finished"));
    }
    if cfg!(feature = "log-debug") {
        assert!(lines.contains(&"DEBUG: add(10, 5)"));
        assert!(lines.contains(&"DEBUG: divide(10, 0)"));
    }

    let stderr = String::from_utf8(output.stderr).unwrap();
    let errors: Vec<&str> = stderr.lines().map(body).collect();
    assert_eq!(
        errors,
        vec!["ERROR: try_divide(10, 0) failed: division by zero (dividend 10)"]
    );
}

#[cfg(feature = "log-info")]
#[test]
fn no_arguments_ignores_user_config_dir() {
    let home = TempDir::new().expect("Failed to create temp dir");
    write_user_config(home.path(), "[logging]\nlevel = \"error\"\n");

    let output = run_with_home(home.path(), &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().map(body).any(|l| l == "INFO: 10 + 5 = 15"));
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_flag_reads_config_dir() {
    let home = TempDir::new().expect("Failed to create temp dir");
    write_user_config(home.path(), "[logging]\nlevel = \"error\"\n");

    let output = run_with_home(home.path(), &["--user-config"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().map(body).count(), 1);
}
