//! Tests for scripted session replay.

use clipocr::SessionConfig;
use clipocr::pipeline::UNEXPECTED_ERROR;
use clipocr::replay::{self, ReplayScript};

fn script(json: &str) -> ReplayScript {
    ReplayScript::from_json(json).unwrap()
}

#[tokio::test(start_paused = true)]
async fn replays_a_successful_submit() {
    let script = script(
        r#"{
            "latency_ms": 200,
            "responses": [
                {"text": "$x ^ { 2 }$", "mathML": "<math/>", "tsv": "", "confidence": 0.92}
            ],
            "steps": [
                {"action": "copy_image", "width": 120, "height": 40},
                {"action": "wait", "ms": 1000},
                {"action": "key", "key": "enter"},
                {"action": "settle"}
            ]
        }"#,
    );

    let report = replay::run(&script, &SessionConfig::default()).await.unwrap();

    assert_eq!(report.decisions(), vec!["dispatched"]);
    assert_eq!(report.outcomes, vec!["success"]);
    assert_eq!(report.recognizer_calls, 1);
    assert_eq!(report.clipboard_writes, vec!["$x ^ { 2 }$".to_string()]);
    assert_eq!(
        report.display.actionable_candidates(),
        vec!["$x ^ { 2 }$", "x ^ { 2 }", "x^{2}"]
    );
    assert!(report.errors.is_empty());
    assert!(!report.display.waiting);
}

#[tokio::test(start_paused = true)]
async fn wait_presents_results_that_arrive_in_time() {
    let script = script(
        r#"{
            "latency_ms": 300,
            "responses": [{"text": "abc", "confidence": 0.5}],
            "steps": [
                {"action": "copy_image", "width": 10, "height": 10},
                {"action": "wait", "ms": 1000},
                {"action": "trigger", "kind": "submit"},
                {"action": "wait", "ms": 500},
                {"action": "key", "key": "enter"}
            ]
        }"#,
    );

    let report = replay::run(&script, &SessionConfig::default()).await.unwrap();

    // delivered during the wait, before the second submit
    assert_eq!(report.outcomes, vec!["success"]);
    assert_eq!(
        report.decisions(),
        vec!["dispatched", "already_submitted"]
    );
}

#[tokio::test(start_paused = true)]
async fn failures_are_reported() {
    let script = script(
        r#"{
            "responses": [
                {"error": "Invalid credentials"},
                null
            ],
            "steps": [
                {"action": "copy_image", "width": 10, "height": 10},
                {"action": "wait", "ms": 1000},
                {"action": "key", "key": "delete"},
                {"action": "settle"},
                {"action": "wait", "ms": 1000},
                {"action": "key", "key": "insert"},
                {"action": "key", "key": "return"},
                {"action": "settle"}
            ]
        }"#,
    );

    let report = replay::run(&script, &SessionConfig::default()).await.unwrap();

    assert_eq!(
        report.decisions(),
        vec!["dispatched", "refreshed", "dispatched"]
    );
    assert_eq!(report.outcomes, vec!["invalid_credentials", "no_response"]);
    assert_eq!(report.settings_opened, vec![1]);
    assert_eq!(
        report.errors,
        vec!["Invalid credentials".to_string(), UNEXPECTED_ERROR.to_string()]
    );
    assert_eq!(report.clipboard_writes, vec![String::new()]);
    assert_eq!(report.display.confidence.value, 0.0);
}

#[tokio::test(start_paused = true)]
async fn empty_clipboard_reports_no_image() {
    let script = script(
        r#"{
            "steps": [
                {"action": "clear_clipboard"},
                {"action": "wait", "ms": 1000},
                {"action": "key", "key": "enter"}
            ]
        }"#,
    );

    let report = replay::run(&script, &SessionConfig::default()).await.unwrap();

    assert_eq!(report.decisions(), vec!["no_image"]);
    assert_eq!(report.recognizer_calls, 0);
    assert_eq!(report.errors.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn report_serializes_to_json() {
    let script = script(
        r#"{
            "responses": [{"text": "hi", "confidence": 0.1}],
            "steps": [
                {"action": "copy_image", "width": 3, "height": 3},
                {"action": "wait", "ms": 1000},
                {"action": "key", "key": "enter"}
            ]
        }"#,
    );

    let report = replay::run(&script, &SessionConfig::default()).await.unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["outcomes"][0], "success");
    assert_eq!(json["triggers"][0]["kind"], "submit");
    assert_eq!(json["display"]["confidence"]["band"], "low");
    assert_eq!(json["display"]["candidates"][0]["text"], "hi");
}
