//! End-to-end tests of the vcli binary surface.
//!
//! These exercise argument parsing, config resolution, and exit codes
//! without a vCenter. Every test pins `--config` to a path it controls so
//! the developer's real `~/.vcli.conf` never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn vcli() -> Command {
    let mut cmd = Command::cargo_bin("vcli").unwrap();
    // Keep env overrides from the host machine out of the picture.
    cmd.env_remove("VCLI_CONFIG")
        .env_remove("VCLI_HOST")
        .env_remove("VCLI_PORT")
        .env_remove("VCLI_USERNAME")
        .env_remove("VCLI_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    vcli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("encrypt"))
        .stdout(predicate::str::contains("snapshot"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("destroy"));
}

#[test]
fn test_version_flag() {
    vcli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vcli"));
}

#[test]
fn test_no_subcommand_is_a_usage_error() {
    vcli().assert().failure().code(2);
}

#[test]
fn test_missing_config_and_no_host_flag() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.conf");

    vcli()
        .args(["--config", missing.to_str().unwrap(), "list", "vm"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("host not defined"));
}

#[test]
fn test_malformed_config_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    let conf = dir.path().join("broken.conf");
    fs::write(&conf, "vcenter: [not, a, mapping\n").unwrap();

    vcli()
        .args(["--config", conf.to_str().unwrap(), "list", "vm"])
        .assert()
        .failure()
        .code(6);
}

#[test]
fn test_config_missing_username_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    let conf = dir.path().join("partial.conf");
    fs::write(&conf, "vcenter:\n  host: vcenter.example.com\n").unwrap();

    vcli()
        .args(["--config", conf.to_str().unwrap(), "list", "vm"])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("username"));
}

#[test]
fn test_undecryptable_token_exits_with_decryption_code() {
    let dir = TempDir::new().unwrap();
    let conf = dir.path().join("bad-token.conf");
    fs::write(
        &conf,
        "vcenter:\n  host: vcenter.example.com\n  username: admin\n  password: 'AAAA'\n",
    )
    .unwrap();

    vcli()
        .args(["--config", conf.to_str().unwrap(), "list", "vm"])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("Malformed ciphertext token"));
}

#[test]
fn test_migrate_requires_a_target() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.conf");

    // The target check runs before any connection attempt, so the missing
    // config never comes into play.
    vcli()
        .args(["--config", missing.to_str().unwrap(), "migrate", "web01"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--host or --datastore"));
}

#[test]
fn test_port_zero_flag_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.conf");

    vcli()
        .args([
            "--config",
            missing.to_str().unwrap(),
            "--host",
            "vcenter.example.com",
            "--port",
            "0",
            "list",
            "vm",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("0"));
}

#[test]
fn test_resume_is_an_alias_for_start() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.conf");

    // Parsing succeeds (no clap usage error); the command then fails at
    // connection resolution like any other connecting subcommand.
    vcli()
        .args(["--config", missing.to_str().unwrap(), "resume", "web01"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("host not defined"));
}

#[test]
fn test_invalid_output_format_rejected() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.conf");

    vcli()
        .args([
            "--config",
            missing.to_str().unwrap(),
            "--output",
            "xml",
            "list",
            "vm",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}
