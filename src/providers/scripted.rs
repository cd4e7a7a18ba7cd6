//! In-memory clipboard and recognizer driven by a script.
//!
//! Used by the replay harness and by tests. Both are safe to share between
//! the session and the code that drives it: the driver swaps the clipboard
//! image or queues responses while the session reads them.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::traits::{ClipboardProvider, RecognitionProvider};
use crate::types::{ImageHandle, RecognitionResult};
use crate::{ClipocrError, Result};

// ============================================================================
// ScriptedClipboard
// ============================================================================

/// Clipboard holding at most one image and a history of written text.
#[derive(Debug, Default)]
pub struct ScriptedClipboard {
    image: Mutex<Option<ImageHandle>>,
    written: Mutex<Vec<String>>,
}

impl ScriptedClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(image: ImageHandle) -> Self {
        let clipboard = Self::new();
        clipboard.set_image(Some(image));
        clipboard
    }

    /// Put an image on the clipboard, or clear it with `None`.
    pub fn set_image(&self, image: Option<ImageHandle>) {
        *self.image.lock().unwrap_or_else(|e| e.into_inner()) = image;
    }

    /// Every string written so far, oldest first.
    pub fn written(&self) -> Vec<String> {
        self.written
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn last_written(&self) -> Option<String> {
        self.written
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

impl ClipboardProvider for ScriptedClipboard {
    fn read_image(&self) -> Result<Option<ImageHandle>> {
        Ok(self.image.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let mut image = self.image.lock().unwrap_or_else(|e| e.into_inner());
        // writing text replaces whatever image was on the clipboard
        *image = None;
        self.written
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(text.to_string());
        Ok(())
    }
}

// ============================================================================
// ScriptedRecognizer
// ============================================================================

/// Recognizer that replays queued responses in order.
///
/// A queued `None` simulates a transport failure. Once the queue is empty
/// every call fails with [`ClipocrError::ProviderExhausted`].
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    responses: Mutex<VecDeque<Option<RecognitionResult>>>,
    latency: Duration,
    calls: AtomicU32,
}

impl ScriptedRecognizer {
    pub fn new(responses: impl IntoIterator<Item = Option<RecognitionResult>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            latency: Duration::ZERO,
            calls: AtomicU32::new(0),
        }
    }

    /// Delay every call by `latency` before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn push(&self, response: Option<RecognitionResult>) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
    }

    /// Number of `recognize` calls made so far.
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RecognitionProvider for ScriptedRecognizer {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn recognize(&self, _image: &ImageHandle) -> Result<RecognitionResult> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let next = self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        match next {
            Some(Some(result)) => Ok(result),
            Some(None) => Err(ClipocrError::Transport(
                "scripted transport failure".to_string(),
            )),
            None => Err(ClipocrError::ProviderExhausted),
        }
    }
}
