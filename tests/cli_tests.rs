//! End-to-end tests for the `konga-seed` binary.

use std::fs;

use anyhow::Result;
use assert_cmd::Command;
use tempfile::TempDir;

fn konga_seed(dir: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("konga-seed")?;
    cmd.current_dir(dir.path())
        .env_remove("KONGA_PROFILE")
        .env_remove("KONGA_LOG_FORMAT")
        .env_remove("KONGA_SEED_KONG_NODE_DATA_SOURCE_FILE")
        .env_remove("RUST_LOG")
        .env("KONGA_LOG_LEVEL", "error");
    Ok(cmd)
}

#[test]
fn prints_built_in_seed_as_json() -> Result<()> {
    let dir = TempDir::new()?;
    let output = konga_seed(&dir)?.arg("--compact").output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let records = value.as_array().expect("array output");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "kong-gateway");
    assert_eq!(records[0]["kong_admin_url"], "http://kong:8001");
    assert_eq!(records[0]["created_at"], records[0]["updated_at"]);
    Ok(())
}

#[test]
fn source_flag_overrides_built_in_seed() -> Result<()> {
    let dir = TempDir::new()?;
    let source = dir.path().join("nodes.json");
    fs::write(
        &source,
        r#"[{"name": "edge", "kong_admin_url": "https://edge:8444", "kong_version": "3.x", "active": true}]"#,
    )?;

    let output = konga_seed(&dir)?.arg("--source").arg(&source).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value[0]["name"], "edge");
    assert_eq!(value[0]["type"], "default");
    Ok(())
}

#[test]
fn invalid_source_fails_with_nonzero_exit() -> Result<()> {
    let dir = TempDir::new()?;
    let source = dir.path().join("nodes.json");
    fs::write(&source, "[]")?;

    let output = konga_seed(&dir)?.arg("--source").arg(&source).output()?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("resolving kong node seed"));
    Ok(())
}

#[test]
fn logs_go_to_stderr_and_stdout_stays_json() -> Result<()> {
    let dir = TempDir::new()?;
    let output = konga_seed(&dir)?
        .env("KONGA_LOG_LEVEL", "info")
        .arg("--compact")
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value[0]["name"], "kong-gateway");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("kong node seed written"));
    assert!(stderr.contains("Using built-in kong node seed"));
    Ok(())
}
