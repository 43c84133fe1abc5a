//! CLI smoke tests for twofin.
//!
//! These tests verify that the driver commands run, print the documented
//! envelopes, and use exit codes consistently.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Get a Command for the twofin binary.
fn twofin_cmd() -> Command {
  cargo_bin_cmd!("twofin")
}

#[test]
fn call_get_platform_version_succeeds() {
  twofin_cmd()
    .args(["call", "getPlatformVersion"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty().not());
}

#[test]
fn call_unknown_method_fails_in_text_mode() {
  twofin_cmd()
    .args(["call", "ping"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("method not implemented: ping"));
}

#[test]
fn call_json_prints_success_envelope() {
  twofin_cmd()
    .args(["call", "getPlatformVersion", "--format", "json"])
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""status": "success""#));
}

#[test]
fn call_json_prints_sentinel_and_exits_zero() {
  twofin_cmd()
    .args(["call", "ping", "--format", "json"])
    .assert()
    .success()
    .stdout(predicate::str::contains("not_implemented"));
}

#[test]
fn call_accepts_and_ignores_args_payload() {
  twofin_cmd()
    .args(["call", "getPlatformVersion", "--args", r#"{"unused": true}"#])
    .assert()
    .success();
}

#[test]
fn call_rejects_malformed_args() {
  twofin_cmd()
    .args(["call", "getPlatformVersion", "--args", "{not json"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--args must be valid JSON"));
}

#[test]
fn info_shows_channel_and_host() {
  twofin_cmd()
    .arg("info")
    .assert()
    .success()
    .stdout(predicate::str::contains("two_finance_blockchain"));
}
