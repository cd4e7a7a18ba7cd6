//! Tests for loading configuration files from disk.

use std::sync::Arc;
use std::time::Duration;

use clipocr::providers::{RecordingSink, ScriptedClipboard, ScriptedRecognizer};
use clipocr::{ClipocrError, Config, Session, SingleFlightPolicy, TriggerDecision, TriggerKind};

#[test]
fn load_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
        [session]
        debounce_window_ms = 300
        single_flight = "until-complete"

        [logging]
        filter = "clipocr=trace"
    "#,
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.session.debounce_window(), Duration::from_millis(300));
    assert_eq!(config.session.single_flight, SingleFlightPolicy::UntilComplete);
    assert_eq!(config.logging.filter, "clipocr=trace");
}

#[test]
fn empty_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.session.debounce_window_ms, 1000);
    assert_eq!(config.session.single_flight, SingleFlightPolicy::UntilRefresh);
}

#[test]
fn malformed_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[session\ndebounce_window_ms = ").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ClipocrError::Configuration(_)));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn wrong_value_type_is_rejected() {
    let err = Config::parse(
        r#"
        [session]
        debounce_window_ms = "soon"
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, ClipocrError::Configuration(_)));
}

#[tokio::test(start_paused = true)]
async fn session_follows_configured_window() {
    let config = Config::parse(
        r#"
        [session]
        debounce_window_ms = 200
    "#,
    )
    .unwrap();

    let mut session = Session::builder()
        .config(&config.session)
        .clipboard(Arc::new(ScriptedClipboard::new()))
        .recognizer(Arc::new(ScriptedRecognizer::default()))
        .sink(Arc::new(RecordingSink::new()))
        .build()
        .unwrap();
    assert_eq!(session.gate().window(), Duration::from_millis(200));

    tokio::time::advance(Duration::from_millis(100)).await;
    assert_eq!(
        session.handle_trigger(TriggerKind::Refresh),
        TriggerDecision::Debounced
    );
    tokio::time::advance(Duration::from_millis(250)).await;
    assert_eq!(
        session.handle_trigger(TriggerKind::Refresh),
        TriggerDecision::Refreshed
    );
}
