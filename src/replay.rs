//! Scripted replay of a front-end session.
//!
//! A replay script is a JSON document describing clipboard changes, key
//! presses and pauses, plus the responses the recognition service should
//! give, in order:
//!
//! ```json
//! {
//!   "latency_ms": 200,
//!   "responses": [
//!     { "text": "$x^{2}$", "mathML": "<math/>", "confidence": 0.92 },
//!     null
//!   ],
//!   "steps": [
//!     { "action": "copy_image", "width": 120, "height": 40 },
//!     { "action": "wait", "ms": 1000 },
//!     { "action": "key", "key": "enter" },
//!     { "action": "settle" }
//!   ]
//! }
//! ```
//!
//! A `null` response simulates a transport failure. The session is built
//! at the start of the replay, which counts as a completed refresh and
//! submit, so scripts usually wait one debounce window before the first
//! key press.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::time::{Duration, Instant};
use tracing::debug;

use crate::config::SessionConfig;
use crate::pipeline::Outcome;
use crate::providers::{
    RecordingSettings, RecordingSink, ScriptedClipboard, ScriptedRecognizer,
};
use crate::types::{DisplayState, ImageHandle, RecognitionResult, TriggerDecision, TriggerKind};
use crate::{ClipocrError, Result, Session};

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    /// Simulated recognition latency in milliseconds.
    #[serde(default)]
    pub latency_ms: u64,
    #[serde(default)]
    pub responses: Vec<Option<RecognitionResult>>,
    pub steps: Vec<ReplayStep>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReplayStep {
    /// Place an image of the given size on the clipboard.
    CopyImage { width: u32, height: u32 },
    ClearClipboard,
    /// Press a key; unbound keys are rejected when the script is parsed.
    Key { key: String },
    Trigger { kind: TriggerKind },
    /// Let time pass, presenting results that arrive meanwhile.
    Wait { ms: u64 },
    /// Present every outstanding result.
    Settle,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(ClipocrError::InvalidInput(
                "replay script has no steps".to_string(),
            ));
        }
        for (index, step) in self.steps.iter().enumerate() {
            if let ReplayStep::Key { key } = step {
                if TriggerKind::from_key(key).is_none() {
                    return Err(ClipocrError::Script {
                        step: index,
                        message: format!("key `{key}` is not bound to a trigger"),
                    });
                }
            }
        }
        Ok(())
    }
}

/// A trigger handled during the replay.
#[derive(Debug, Clone, Serialize)]
pub struct TriggerRecord {
    pub step: usize,
    pub kind: TriggerKind,
    pub decision: &'static str,
}

/// What happened during a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub triggers: Vec<TriggerRecord>,
    /// Outcome labels in delivery order.
    pub outcomes: Vec<&'static str>,
    pub errors: Vec<String>,
    /// Settings dialog tab indices opened, in order.
    pub settings_opened: Vec<usize>,
    pub clipboard_writes: Vec<String>,
    pub recognizer_calls: u32,
    pub display: DisplayState,
}

impl ReplayReport {
    pub fn decisions(&self) -> Vec<&'static str> {
        self.triggers.iter().map(|t| t.decision).collect()
    }
}

/// Replay `script` against scripted collaborators.
///
/// Runs on the current tokio runtime; waits use tokio time, so a paused
/// clock replays instantly.
pub async fn run(script: &ReplayScript, config: &SessionConfig) -> Result<ReplayReport> {
    let clipboard = Arc::new(ScriptedClipboard::new());
    let recognizer = Arc::new(
        ScriptedRecognizer::new(script.responses.iter().cloned())
            .with_latency(Duration::from_millis(script.latency_ms)),
    );
    let sink = Arc::new(RecordingSink::new());
    let settings = Arc::new(RecordingSettings::new());

    let mut session = Session::builder()
        .config(config)
        .clipboard(clipboard.clone())
        .recognizer(recognizer.clone())
        .sink(sink.clone())
        .settings(settings.clone())
        .build()?;

    let mut triggers = Vec::new();
    let mut outcomes = Vec::new();

    for (index, step) in script.steps.iter().enumerate() {
        debug!(step = index, ?step, "replay step");
        match step {
            ReplayStep::CopyImage { width, height } => {
                clipboard.set_image(Some(ImageHandle::new(*width, *height, Vec::<u8>::new())));
            }
            ReplayStep::ClearClipboard => clipboard.set_image(None),
            ReplayStep::Key { key } => {
                let kind = TriggerKind::from_key(key).ok_or_else(|| ClipocrError::Script {
                    step: index,
                    message: format!("key `{key}` is not bound to a trigger"),
                })?;
                let decision = session.handle_trigger(kind);
                triggers.push(record(index, kind, decision));
            }
            ReplayStep::Trigger { kind } => {
                let decision = session.handle_trigger(*kind);
                triggers.push(record(index, *kind, decision));
            }
            ReplayStep::Wait { ms } => {
                wait(&mut session, Duration::from_millis(*ms), &mut outcomes).await;
            }
            ReplayStep::Settle => {
                outcomes.extend(session.settle().await);
            }
        }
    }
    outcomes.extend(session.settle().await);

    Ok(ReplayReport {
        triggers,
        outcomes: outcomes.iter().map(Outcome::label).collect(),
        errors: sink.errors(),
        settings_opened: settings.opened().iter().map(|s| s.index()).collect(),
        clipboard_writes: clipboard.written(),
        recognizer_calls: recognizer.call_count(),
        display: session.display().clone(),
    })
}

fn record(step: usize, kind: TriggerKind, decision: TriggerDecision) -> TriggerRecord {
    TriggerRecord {
        step,
        kind,
        decision: decision.as_str(),
    }
}

async fn wait(session: &mut Session, duration: Duration, outcomes: &mut Vec<Outcome>) {
    let deadline = Instant::now() + duration;
    loop {
        tokio::select! {
            _ = tokio::time::sleep_until(deadline) => break,
            Some(delivery) = session.next_delivery(), if session.has_pending() => {
                outcomes.push(session.handle_delivery(delivery));
            }
        }
    }
}
