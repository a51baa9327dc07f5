use std::fs;
use std::path::Path;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::{tempdir, TempDir};

fn write_doc(root: &Path, rel: &str, text: &str) {
    let path = root.join("content").join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

fn setup_site() -> TempDir {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("casebook.toml"),
        "content_dir = \"content\"\n",
    )
    .unwrap();
    fs::create_dir_all(temp.path().join("content")).unwrap();
    write_doc(
        temp.path(),
        "ministry-reporting.mdx",
        r#"---
title: Ministry Reporting
description: AI-powered generation of monitoring reports
tags:
  - report-generation
  - nlp
  - automation
  - rag
stakeholders:
  - Portfolio Manager
clusters:
  - Report Generation & Analysis
pillars:
  - Prosperity
difficulty: intermediate
---

# Ministry Reporting
"#,
    );
    write_doc(
        temp.path(),
        "chat-assistant.md",
        r#"---
title: Chat Assistant
description: Multilingual chat support for members
tags:
  - chatbot
clusters:
  - User-Facing Applications
difficulty: advanced
---
"#,
    );
    temp
}

fn casebook(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("casebook").expect("binary");
    cmd.current_dir(root);
    cmd
}

#[test]
fn scan_reports_counts_as_json() {
    let temp = setup_site();
    let output = casebook(temp.path())
        .args(["scan", "--json"])
        .output()
        .expect("run scan");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(report["documents"], 2);
    assert_eq!(report["loaded"], 2);
    assert_eq!(report["skipped"], 0);
    assert!(report["warnings"].as_array().expect("array").is_empty());
}

#[test]
fn scan_skips_malformed_documents_without_failing() {
    let temp = setup_site();
    write_doc(temp.path(), "broken.md", "---\ntitle: [oops\n---\n");

    let output = casebook(temp.path())
        .args(["scan", "--json"])
        .output()
        .expect("run scan");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(report["documents"], 3);
    assert_eq!(report["loaded"], 2);
    assert_eq!(report["skipped"], 1);
    let warnings = report["warnings"].as_array().expect("array");
    assert!(warnings
        .iter()
        .any(|w| w.as_str().unwrap_or_default().contains("broken.md")));
}

#[test]
fn scan_counts_unreadable_documents() {
    let temp = setup_site();
    fs::write(
        temp.path().join("content/binary.md"),
        [0xFF, 0xFE, 0x00, 0x01],
    )
    .unwrap();

    let output = casebook(temp.path())
        .args(["scan", "--json"])
        .output()
        .expect("run scan");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(report["documents"], 3);
    assert_eq!(report["loaded"], 2);
    assert_eq!(report["skipped"], 1);
    let warnings = report["warnings"].as_array().expect("array");
    assert!(warnings
        .iter()
        .any(|w| w.as_str().unwrap_or_default().contains("binary.md")));
}

#[test]
fn scan_prints_each_warning_once() {
    let temp = setup_site();
    write_doc(temp.path(), "broken.md", "---\ntitle: [oops\n---\n");

    let output = casebook(temp.path())
        .env("RUST_LOG", "info")
        .arg("scan")
        .output()
        .expect("run scan");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("broken.md").count(), 1);
}

#[test]
fn scan_human_summary_goes_to_stderr() {
    let temp = setup_site();
    casebook(temp.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("Loaded 2 of 2 documents"));
}

#[test]
fn scan_fails_on_missing_content_dir() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("casebook.toml"),
        "content_dir = \"content\"\n",
    )
    .unwrap();

    casebook(temp.path())
        .arg("scan")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Failed to load content tree"));
}
