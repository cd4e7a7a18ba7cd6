//! Sink and settings dialog that record what the session asked of them.

use std::sync::Mutex;

use super::traits::{PresentationSink, SettingsDialog, SettingsSection};
use crate::types::{DisplayState, PresentationEvent};

/// Presentation sink that keeps every event and the display state they build.
#[derive(Debug, Default)]
pub struct RecordingSink {
    inner: Mutex<Recorded>,
}

#[derive(Debug, Default)]
struct Recorded {
    events: Vec<PresentationEvent>,
    state: DisplayState,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PresentationEvent> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .events
            .clone()
    }

    /// Display state reconstructed from the events received so far.
    pub fn state(&self) -> DisplayState {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .state
            .clone()
    }

    /// Error messages surfaced so far, oldest first.
    pub fn errors(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .events
            .iter()
            .filter_map(|event| match event {
                PresentationEvent::Error { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl PresentationSink for RecordingSink {
    fn present(&self, event: &PresentationEvent) {
        let mut recorded = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        recorded.state.apply(event);
        recorded.events.push(event.clone());
    }
}

/// Settings dialog that records each section it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingSettings {
    opened: Mutex<Vec<SettingsSection>>,
}

impl RecordingSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<SettingsSection> {
        self.opened
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl SettingsDialog for RecordingSettings {
    fn open(&self, section: SettingsSection) {
        self.opened
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(section);
    }
}
