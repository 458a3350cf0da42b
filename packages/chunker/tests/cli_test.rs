//! Integration tests for the command-line interface.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_peraturan-chunker"))
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("permen_lhk_14_2024.txt")
}

#[test]
fn test_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chunk"))
        .stdout(predicate::str::contains("metadata"));
}

#[test]
fn test_chunk_to_stdout() {
    let output = cli().arg("chunk").arg(fixture()).assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(report["status"], "completed");
    assert_eq!(report["summary"]["total_chunks"], 6);
    assert_eq!(report["chunks"][0]["title"], "Metadata Dokumen");
}

#[test]
fn test_chunk_to_yaml_file() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("report.yaml");

    cli()
        .arg("chunk")
        .arg(fixture())
        .args(["--format", "yaml", "--max-chunk-size", "200", "--overlap-size", "0"])
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved to:"));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(content.contains("status: completed"));
    assert!(content.contains("chunk_id: Pasal 1_1"));
}

#[test]
fn test_chunk_rejects_out_of_range_size() {
    cli()
        .arg("chunk")
        .arg(fixture())
        .args(["--max-chunk-size", "50"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid max chunk size: 50"));
}

#[test]
fn test_chunk_rejects_out_of_range_overlap() {
    cli()
        .arg("chunk")
        .arg(fixture())
        .args(["--overlap-size", "600"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid overlap size: 600"));
}

#[test]
fn test_chunk_invalid_utf8_writes_failed_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.txt");
    let output_path = dir.path().join("report.json");
    fs::write(&input, b"Pasal 1\nIsi \xFF pasal.").unwrap();

    cli()
        .arg("chunk")
        .arg(&input)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(report["status"], "failed");
    assert!(report.get("chunks").is_none());
    let elapsed = report["processing_time_secs"].as_f64().unwrap();
    assert!(elapsed > 0.0, "elapsed = {elapsed}");
}

#[test]
fn test_chunk_missing_file() {
    cli()
        .arg("chunk")
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_metadata_command() {
    cli()
        .arg("metadata")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nomor\": \"14 TAHUN 2024\""))
        .stdout(predicate::str::contains("\"nama_penandatangan\": \"SITI NURBAYA\""));
}
