use assert_cmd::Command;
use crashlens_testing::fixtures::dashboard_sample;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_sample(dir: &TempDir) -> String {
    let path = dir.path().join("logs.json");
    let json = serde_json::to_string(&dashboard_sample()).unwrap();
    fs::write(&path, json).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn report_plain_prints_every_section() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);

    Command::cargo_bin("crashlens")
        .unwrap()
        .args(["report", "--input", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 matching error logs"))
        .stdout(predicate::str::contains("Errors by browser & version"))
        .stdout(predicate::str::contains("Chrome"))
        .stdout(predicate::str::contains("Errors by platform"))
        .stdout(predicate::str::contains("Windows"));
}

#[test]
fn report_json_honors_browser_facet() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);

    Command::cargo_bin("crashlens")
        .unwrap()
        .args([
            "report", "--input", &input, "--browser", "Safari", "--format", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 1"))
        .stdout(predicate::str::contains("\"label\": \"Safari\""))
        .stdout(predicate::str::contains("Chrome").not());
}

#[test]
fn report_outside_date_window_prints_no_data() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);

    Command::cargo_bin("crashlens")
        .unwrap()
        .args([
            "report",
            "--input",
            &input,
            "--from",
            "2024-05-01T00:00:00Z",
            "--to",
            "2024-05-02T00:00:00Z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching error logs"));
}

#[test]
fn list_limits_and_reports_remainder() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);

    Command::cargo_bin("crashlens")
        .unwrap()
        .args(["list", "--input", &input, "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("... 2 more"));
}

#[test]
fn list_reads_json_lines_from_stdin() {
    let lines: Vec<String> = dashboard_sample()
        .iter()
        .map(|log| serde_json::to_string(log).unwrap())
        .collect();

    Command::cargo_bin("crashlens")
        .unwrap()
        .args(["list", "--game", "mahjong"])
        .write_stdin(lines.join("\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("mahjong"))
        .stdout(predicate::str::contains("solitaire").not());
}

#[test]
fn missing_input_file_fails_with_context() {
    Command::cargo_bin("crashlens")
        .unwrap()
        .args(["report", "--input", "/nonexistent/logs.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/logs.json"));
}
