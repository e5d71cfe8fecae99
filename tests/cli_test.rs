//! Integration tests for the cd-recent binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.temp.path().join("cd-recent").join("config.json")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("cd-recent"));
        cmd.env("CD_RECENT_CONFIG", self.config_path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn write_history(&self, content: &str) -> PathBuf {
        let path = self.temp.path().join(".bash_history");
        fs::write(&path, content).unwrap();
        path
    }

    fn config(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.config_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("cd-recent"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("recently visited directories"))
        .stdout(predicate::str::contains("--historyFile"))
        .stdout(predicate::str::contains("--defaultLimit"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("cd-recent"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn first_run_creates_default_config() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .assert()
        .success()
        .stderr(predicate::str::contains("History file is not set"))
        .stderr(predicate::str::contains("cd-recent -H <history-file-path>"));

    let config = sandbox.config();
    assert_eq!(config["historyFilePath"], "");
    assert_eq!(config["defaultLimit"], 10);
    assert_eq!(config["dynamicTracking"], false);
    assert_eq!(config["recentlyVisitedDirectories"], serde_json::json!([]));
    Ok(())
}

#[test]
fn missing_history_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["-H", "/no/such/history"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "/no/such/history history file does not exist",
        ));
    Ok(())
}

#[test]
fn retroactive_listing_reads_history() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    let history = sandbox.write_history("...; cd /home/a\nls\ncd /home/b; cd /home/c\n");

    sandbox
        .cmd()
        .arg("-H")
        .arg(&history)
        .assert()
        .success()
        .stdout(predicate::str::contains("saved!"));

    let output = sandbox.cmd().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["[missing] /home/c", "[missing] /home/a"]);
    Ok(())
}

#[test]
fn dynamic_tracking_lists_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    let real = sandbox.temp.path().to_str().unwrap().to_string();

    sandbox
        .cmd()
        .arg("-t")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dynamic tracking enabled"));
    for dir in ["/gone/one", real.as_str(), "/gone/two"] {
        sandbox.cmd().args(["-a", dir]).assert().success().stdout("");
    }

    let output = sandbox.cmd().args(["-l", "2"]).output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["[missing] /gone/two".to_string(), format!("[ok] {}", real)]);
    Ok(())
}

#[test]
fn default_limit_is_persisted() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["-d", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default limit set to 7"));

    assert_eq!(sandbox.config()["defaultLimit"], 7);
    Ok(())
}

#[test]
fn invalid_limit_warns_and_exits_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["-l", "-3"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains(
            "Limit must be a positive number but was -3",
        ));
    Ok(())
}

#[test]
fn invalid_limit_on_first_run_creates_config() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox.cmd().args(["-l", "abc"]).assert().success();

    assert_eq!(sandbox.config()["defaultLimit"], 10);
    Ok(())
}

#[test]
fn invalid_default_limit_leaves_config_alone() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["-d", "zero"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Default limit must be a positive number but was zero",
        ));

    assert_eq!(sandbox.config()["defaultLimit"], 10);
    Ok(())
}

#[test]
fn reset_clears_recorded_directories() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox.cmd().args(["-t", "-a", "/a"]).assert().success();
    sandbox.cmd().args(["-a", "/b"]).assert().success();
    assert_eq!(
        sandbox.config()["recentlyVisitedDirectories"],
        serde_json::json!(["/a", "/b"])
    );

    sandbox
        .cmd()
        .arg("-r")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent directories reset"));

    assert_eq!(
        sandbox.config()["recentlyVisitedDirectories"],
        serde_json::json!([])
    );
    sandbox
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No recent directories"));
    Ok(())
}

#[test]
fn json_listing() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox.cmd().args(["-t", "-a", "/x"]).assert().success();

    let output = sandbox.cmd().arg("--json").output()?;
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed, serde_json::json!([{ "path": "/x", "valid": false }]));
    Ok(())
}

#[test]
fn quiet_suppresses_status_messages() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["-q", "-d", "4"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(sandbox.config()["defaultLimit"], 4);
    Ok(())
}

#[test]
fn corrupt_config_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    fs::create_dir_all(sandbox.config_path().parent().unwrap())?;
    fs::write(sandbox.config_path(), "{ not json")?;

    sandbox
        .cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn config_flag_overrides_env() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    let other = sandbox.temp.path().join("other.json");

    sandbox
        .cmd()
        .arg("--config")
        .arg(&other)
        .args(["-d", "3"])
        .assert()
        .success();

    assert!(other.exists());
    assert!(!sandbox.config_path().exists());
    Ok(())
}

#[test]
fn init_prints_hook() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--init", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("builtin cd"))
        .stdout(predicate::str::contains("cd-recent --add \"$PWD\""));
    Ok(())
}

#[test]
fn completions_are_generated() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("cd-recent"));
    cmd.args(["--completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cd-recent"));
    Ok(())
}
