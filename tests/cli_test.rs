//! Integration tests for the `paramchain` binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PARAMS: &str = r#"
Region: us-east-1
DefaultRegion: !Ref Region
Zones:
  - !Ref PrimaryZone
  - us-east-1c
PrimaryZone: us-east-1a
Loop: !Ref Loop
"#;

fn setup_project(config: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("params.yml"), PARAMS).unwrap();
    if let Some(config) = config {
        fs::write(temp.path().join(".paramchain.yml"), config).unwrap();
    }
    temp
}

fn paramchain(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("paramchain"));
    cmd.current_dir(temp.path());
    cmd.env_remove("PARAMCHAIN_DATA_SOURCES");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("paramchain"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("recursive parameter resolution"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("paramchain"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn get_follows_pointer_from_flag_source() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    paramchain(&temp)
        .args(["-d", "yaml:params.yml", "get", "DefaultRegion"])
        .assert()
        .success()
        .stdout("us-east-1\n");
    Ok(())
}

#[test]
fn get_uses_config_file_sources() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some("data_sources:\n  - yaml:params.yml\noutput: json\n"));
    paramchain(&temp)
        .args(["get", "Zones"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"us-east-1a\""))
        .stdout(predicate::str::contains("\"us-east-1c\""));
    Ok(())
}

#[test]
fn get_reads_sources_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    paramchain(&temp)
        .env("PARAMCHAIN_DATA_SOURCES", "yaml:params.yml")
        .args(["get", "Region"])
        .assert()
        .success()
        .stdout("us-east-1\n");
    Ok(())
}

#[test]
fn get_raw_shows_pointer() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    paramchain(&temp)
        .args(["-d", "yaml:params.yml", "get", "DefaultRegion", "--raw", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"$ref\": \"Region\""));
    Ok(())
}

#[test]
fn get_unknown_parameter_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    paramchain(&temp)
        .args(["-d", "yaml:params.yml", "get", "Nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unable to find parameter Nope"));
    Ok(())
}

#[test]
fn get_with_unknown_scheme_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    paramchain(&temp)
        .args(["-d", "foo:bar", "get", "Region"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown data source foo"))
        .stderr(predicate::str::contains("yaml"));
    Ok(())
}

#[test]
fn check_reports_cycle() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    paramchain(&temp)
        .args(["-d", "yaml:params.yml", "check", "Region", "Loop"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Circular reference detected: Loop → Loop"));
    Ok(())
}

#[test]
fn check_passes_when_all_resolve() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    paramchain(&temp)
        .args(["-d", "yaml:params.yml", "check", "Region", "Zones"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn schemes_lists_builtins() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    paramchain(&temp)
        .arg("schemes")
        .assert()
        .success()
        .stdout("env\nfile\njson\nyaml\n");
    Ok(())
}

#[test]
fn sources_lists_flag_sources_before_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some("data_sources: [\"env:APP_\"]\n"));
    paramchain(&temp)
        .args(["-d", "yaml:params.yml", "sources"])
        .assert()
        .success()
        .stdout("1. yaml:params.yml\n2. env:APP_\n");
    Ok(())
}

#[test]
fn invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some("data_sources: {oops\n"));
    paramchain(&temp)
        .arg("sources")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn schemes_ignores_invalid_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some("data_sources: {oops\n"));
    paramchain(&temp)
        .arg("schemes")
        .assert()
        .success()
        .stdout("env\nfile\njson\nyaml\n");
    Ok(())
}

#[test]
fn get_resolves_long_pointer_chain() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut params = String::from("P5000: end\n");
    for i in 0..5000 {
        params.push_str(&format!("P{}: !Ref P{}\n", i, i + 1));
    }
    fs::write(temp.path().join("chain.yml"), params)?;

    paramchain(&temp)
        .args(["-d", "yaml:chain.yml", "get", "P0"])
        .assert()
        .success()
        .stdout("end\n");
    Ok(())
}
