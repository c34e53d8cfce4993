use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_senate-bill-status"))
}

#[test]
fn test_classify_plain_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("history.txt");
    fs::write(
        &input,
        "Introduced by Senator Ana Reyes;\nPending in the Committee\nSent to the Archives\n",
    )
    .unwrap();

    let output = binary()
        .args(["classify", "--plain", "--input"])
        .arg(&input)
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["kind"], "introduced");
    assert_eq!(records[0]["senator"]["name"], "Ana Reyes");
    assert_eq!(records[0]["sequence"], 1);
    assert_eq!(records[1]["name"], "Pending in Committee");
    assert_eq!(records[1]["sequence"], 2);
}

#[test]
fn test_classify_with_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("status.toml");
    fs::write(&config, "compound_committees = []\n").unwrap();
    let input = dir.path().join("history.jsonl");
    fs::write(
        &input,
        r#"{"item": "Read on First Reading and Referred to the Committee(s) on Finance and Ways and Means;"}"#,
    )
    .unwrap();

    let output = binary()
        .arg("classify")
        .arg("--input")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let record: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let names: Vec<&str> = record["committees"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Finance", "Ways", "Means"]);
}

#[test]
fn test_malformed_json_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("history.jsonl");
    fs::write(&input, "{\"item\": \"Pending in the Committee\"}\nnot json\n").unwrap();

    let output = binary()
        .args(["classify", "--input"])
        .arg(&input)
        .output()
        .expect("Failed to run binary");
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"), "stderr: {}", stderr);
}

#[test]
fn test_rules_listing() {
    let output = binary()
        .arg("rules")
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], " 1. pending_in_committee");
    assert_eq!(lines[8], " 9. approved_on_second_reading");
}
