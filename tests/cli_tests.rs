
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use sugarlog::constants::{FALLBACK_ANSWER, NO_DATA_MESSAGE};
use sugarlog::readings::ReadingStore;
use tempfile::TempDir;
use test_helpers::{base_sugarlog_command, gemini_reply, log_with_levels, TEST_API_KEY};

#[test]
fn test_cli_log_saves_reading() {
    let (_dir, path) = log_with_levels(&[]);

    base_sugarlog_command(&path)
        .args(["log", "120"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Saved reading of 120 mg/dL at "));

    let readings = ReadingStore::new(&path).load().unwrap();
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].level, 120);
}

#[test]
fn test_cli_log_accepts_range_boundaries() {
    let (_dir, path) = log_with_levels(&[]);

    for level in ["40", "500"] {
        base_sugarlog_command(&path)
            .args(["log", level])
            .assert()
            .success();
    }
    assert_eq!(ReadingStore::new(&path).load().unwrap().len(), 2);
}

#[test]
fn test_cli_log_rejects_out_of_range() {
    let (_dir, path) = log_with_levels(&[]);

    for level in ["39", "501", "-5"] {
        base_sugarlog_command(&path)
            .args(["log", level])
            .assert()
            .failure()
            .stderr(predicate::str::contains("out of range"));
    }
    assert!(!path.exists());
}

#[test]
fn test_cli_log_rejects_non_integer() {
    let (_dir, path) = log_with_levels(&[]);

    base_sugarlog_command(&path)
        .args(["log", "98.6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_history_empty() {
    let (_dir, path) = log_with_levels(&[]);

    base_sugarlog_command(&path)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains(NO_DATA_MESSAGE));
}

#[test]
fn test_cli_history_lists_readings() {
    let (_dir, path) = log_with_levels(&[150, 130, 110]);

    base_sugarlog_command(&path)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("150 mg/dL"))
        .stdout(predicate::str::contains("110 mg/dL"))
        .stdout(predicate::str::contains("3 readings, Latest reading: 110 mg/dL (trend: falling)"));
}

#[test]
fn test_cli_history_json() {
    let (_dir, path) = log_with_levels(&[90, 95]);

    let output = base_sugarlog_command(&path)
        .args(["history", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let levels: Vec<i64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["level"].as_i64().unwrap())
        .collect();
    assert_eq!(levels, vec![90, 95]);
}

#[test]
fn test_cli_trend() {
    let (_dir, path) = log_with_levels(&[100, 110, 120]);

    base_sugarlog_command(&path)
        .arg("trend")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Latest reading: 120 mg/dL (trend: rising)",
        ));
}

#[test]
fn test_cli_trend_empty() {
    let (_dir, path) = log_with_levels(&[]);

    base_sugarlog_command(&path)
        .arg("trend")
        .assert()
        .success()
        .stdout(predicate::str::contains(NO_DATA_MESSAGE));
}

#[test]
fn test_cli_tips() {
    let (_dir, path) = log_with_levels(&[]);

    base_sugarlog_command(&path)
        .arg("tips")
        .assert()
        .success()
        .stdout(predicate::str::contains("Monitoring Tips"));
}

#[test]
fn test_cli_file_flag_overrides_environment() {
    let (_dir, env_path) = log_with_levels(&[]);
    let other = TempDir::new().unwrap();
    let flag_path = other.path().join("other.json");

    base_sugarlog_command(&env_path)
        .args(["log", "101", "--file"])
        .arg(&flag_path)
        .assert()
        .success();

    assert!(!env_path.exists());
    assert_eq!(ReadingStore::new(&flag_path).load().unwrap()[0].level, 101);
}

#[test]
fn test_cli_corrupt_log_fails_visibly() {
    let (_dir, path) = log_with_levels(&[]);
    fs::write(&path, "not json at all").unwrap();

    base_sugarlog_command(&path)
        .args(["log", "120"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "not json at all");
}

#[test]
fn test_cli_ask_requires_api_key() {
    let (_dir, path) = log_with_levels(&[]);

    base_sugarlog_command(&path)
        .args(["ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY is not set"));
}

#[test]
fn test_cli_ask_with_diet_context() {
    let (_dir, path) = log_with_levels(&[100, 120, 140]);

    let mut server = Server::new();
    let mock = server
        .mock("POST", "/models/gemini-2.0-flash:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), TEST_API_KEY.into()))
        .match_body(Matcher::PartialJson(json!({
            "contents": [{"parts": [{"text": "My latest blood sugar reading is 140 mg/dL and the trend is rising. Based on this, what diet suits me?"}]}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_reply("Focus on fiber."))
        .create();

    base_sugarlog_command(&path)
        .env("GEMINI_API_KEY", TEST_API_KEY)
        .env("SUGARLOG_API_URL", server.url())
        .args(["ask", "what", "diet", "suits", "me?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Focus on fiber."));

    mock.assert();
}

#[test]
fn test_cli_ask_prints_fallback_on_service_error() {
    let (_dir, path) = log_with_levels(&[]);

    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/models/gemini-2.0-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("overloaded")
        .create();

    base_sugarlog_command(&path)
        .env("GEMINI_API_KEY", TEST_API_KEY)
        .env("SUGARLOG_API_URL", server.url())
        .args(["ask", "How often should I check my levels?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(FALLBACK_ANSWER))
        .stdout(predicate::str::contains("overloaded").not());
}

#[test]
fn test_cli_ask_with_corrupt_log_prints_fallback_without_sending() {
    let (_dir, path) = log_with_levels(&[]);
    fs::write(&path, "{broken").unwrap();

    let mut server = Server::new();
    let mock = server
        .mock("POST", "/models/gemini-2.0-flash:generateContent")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    base_sugarlog_command(&path)
        .env("GEMINI_API_KEY", TEST_API_KEY)
        .env("SUGARLOG_API_URL", server.url())
        .args(["ask", "what diet suits me?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(FALLBACK_ANSWER))
        .stderr(predicate::str::contains("Could not read reading log"));

    mock.assert();
    assert_eq!(fs::read_to_string(&path).unwrap(), "{broken");
}
