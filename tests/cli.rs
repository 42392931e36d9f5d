use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/transcripts/config.json")
}

#[test]
fn writes_documents_for_fixture_config() {
    let out = tempdir().unwrap();
    let html_dir = out.path().join("html");
    let index_dir = out.path().join("es");

    Command::cargo_bin("transcript-chunker")
        .unwrap()
        .arg(fixture_config())
        .arg(&html_dir)
        .arg(&index_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 3 transcript(s)"));

    assert!(html_dir.join("episode-008-watson.html").is_file());
    let document = fs::read_to_string(index_dir.join("episode-010-html-0.json")).unwrap();
    assert!(document.contains(r#""total_chunks":1"#));
}

#[test]
fn fails_for_missing_config() {
    let out = tempdir().unwrap();
    Command::cargo_bin("transcript-chunker")
        .unwrap()
        .arg(out.path().join("missing.json"))
        .arg(out.path().join("html"))
        .arg(out.path().join("es"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file does not exist"));
}

#[test]
fn unsupported_type_fails_loading() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        r#"{"transcripts": [{"id": "a", "title": "A", "type": "api/aws", "source_files": ["a.json"]}]}"#,
    )
    .unwrap();
    Command::cargo_bin("transcript-chunker")
        .unwrap()
        .arg(&config)
        .arg(dir.path().join("html"))
        .arg(dir.path().join("es"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported provider kind 'api/aws'"));
}

#[test]
fn keep_going_reports_failures_and_exits_nonzero() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        r#"{"transcripts": [
            {"id": "gone", "title": "Gone", "type": "api/gcs", "source_files": ["gone.json"]},
            {"id": "here", "title": "Here", "type": "html", "source_files": ["here.html"]}
        ]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("here.html"), "<p>present</p>").unwrap();
    Command::cargo_bin("transcript-chunker")
        .unwrap()
        .arg(&config)
        .arg(dir.path().join("html"))
        .arg(dir.path().join("es"))
        .arg("--keep-going")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Processed 1 transcript(s)"))
        .stderr(predicate::str::contains("1 transcript(s) failed"));
    assert!(dir.path().join("es/here-0.json").is_file());
}
