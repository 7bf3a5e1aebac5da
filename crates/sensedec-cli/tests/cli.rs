use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sensedec"))
}

#[test]
fn help_covers_decode() {
    cmd().arg("decode").arg("--help").assert().success();
}

#[test]
fn decode_status_to_stdout() {
    let assert = cmd()
        .arg("decode")
        .arg("AgMP")
        .arg("--fport")
        .arg("2")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let record: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(record["port"], 2);
    assert_eq!(record["hw_version"], 2);
    assert_eq!(record["sw_version"], 3);
    assert_eq!(record["battery"], 4.4);
}

#[test]
fn decode_unknown_port_passes_through() {
    let assert = cmd()
        .arg("decode")
        .arg("3q2+7w==")
        .arg("--fport")
        .arg("42")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let record: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(record["port"], 42);
    assert_eq!(record["data"], "deadbeef");
}

#[test]
fn missing_fport_shows_error_and_hint() {
    cmd()
        .arg("decode")
        .arg("AgMP")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("error:").and(contains("missing fport")).and(contains("hint:")));
}

#[test]
fn invalid_base64_shows_error_and_hint() {
    cmd()
        .arg("decode")
        .arg("not base64!!")
        .arg("--fport")
        .arg("2")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("invalid base64").and(contains("hint:")));
}

#[test]
fn truncated_payload_shows_error() {
    cmd()
        .arg("decode")
        .arg("AgM=")
        .arg("--fport")
        .arg("2")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("payload too short: need 3 bytes, got 2"));
}

#[test]
fn output_writes_record_file() {
    let temp = TempDir::new().expect("tempdir");
    let record_path = temp.path().join("record.json");

    cmd()
        .arg("decode")
        .arg("AgMP")
        .arg("--fport")
        .arg("2")
        .arg("-o")
        .arg(&record_path)
        .assert()
        .success()
        .stderr(contains("OK: record written"));

    let written = std::fs::read_to_string(&record_path).expect("read record");
    let record: Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(record["battery"], 4.4);
}

#[test]
fn quiet_suppresses_ok_notice() {
    let temp = TempDir::new().expect("tempdir");
    let record_path = temp.path().join("record.json");

    let assert = cmd()
        .arg("decode")
        .arg("AgMP")
        .arg("--fport")
        .arg("2")
        .arg("-o")
        .arg(&record_path)
        .arg("--quiet")
        .assert()
        .success();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf8 stderr");
    assert!(stderr.is_empty());
}

#[test]
fn pretty_and_compact_conflict() {
    cmd()
        .arg("decode")
        .arg("AgMP")
        .arg("--fport")
        .arg("2")
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure();
}
