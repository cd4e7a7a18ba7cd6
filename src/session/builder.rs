//! Builder for configuring sessions

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use super::Session;
use crate::config::SessionConfig;
use crate::pipeline::{
    DEFAULT_DEBOUNCE_WINDOW, DebounceGate, RecognitionExecutor, SingleFlightGuard,
    SingleFlightPolicy,
};
use crate::providers::{
    ClipboardProvider, Formatter, LatexFormatter, LogSettingsDialog, NoRenderer,
    PresentationSink, RecognitionProvider, RenderProvider, SettingsDialog,
};
use crate::types::DisplayState;
use crate::{ClipocrError, Result};

/// Builder for configuring a [`Session`].
///
/// The clipboard, the recognizer and the presentation sink are required.
/// The formatter defaults to [`LatexFormatter`], the renderer to
/// [`NoRenderer`] and the settings dialog to [`LogSettingsDialog`].
pub struct SessionBuilder {
    clipboard: Option<Arc<dyn ClipboardProvider>>,
    recognizer: Option<Arc<dyn RecognitionProvider>>,
    sink: Option<Arc<dyn PresentationSink>>,
    formatter: Arc<dyn Formatter>,
    renderer: Arc<dyn RenderProvider>,
    settings: Arc<dyn SettingsDialog>,
    debounce_window: Duration,
    single_flight: SingleFlightPolicy,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            clipboard: None,
            recognizer: None,
            sink: None,
            formatter: Arc::new(LatexFormatter),
            renderer: Arc::new(NoRenderer),
            settings: Arc::new(LogSettingsDialog),
            debounce_window: DEFAULT_DEBOUNCE_WINDOW,
            single_flight: SingleFlightPolicy::default(),
        }
    }

    /// Apply the `[session]` section of a configuration file.
    pub fn config(self, config: &SessionConfig) -> Self {
        self.debounce_window(config.debounce_window())
            .single_flight(config.single_flight)
    }

    pub fn clipboard(mut self, clipboard: Arc<dyn ClipboardProvider>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn recognizer(mut self, recognizer: Arc<dyn RecognitionProvider>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn sink(mut self, sink: Arc<dyn PresentationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn RenderProvider>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn settings(mut self, settings: Arc<dyn SettingsDialog>) -> Self {
        self.settings = settings;
        self
    }

    /// Cool-down applied to each trigger kind (default: 1s).
    pub fn debounce_window(mut self, window: Duration) -> Self {
        self.debounce_window = window;
        self
    }

    /// When a honored submit stops blocking further submits.
    pub fn single_flight(mut self, policy: SingleFlightPolicy) -> Self {
        self.single_flight = policy;
        self
    }

    /// Build the session and show the current clipboard image.
    ///
    /// Both debounce timestamps start at the build instant.
    pub fn build(self) -> Result<Session> {
        let clipboard = self
            .clipboard
            .ok_or(ClipocrError::MissingCollaborator("clipboard"))?;
        let recognizer = self
            .recognizer
            .ok_or(ClipocrError::MissingCollaborator("recognizer"))?;
        let sink = self
            .sink
            .ok_or(ClipocrError::MissingCollaborator("presentation sink"))?;

        let mut session = Session {
            gate: DebounceGate::new(self.debounce_window, Instant::now()),
            guard: SingleFlightGuard::new(self.single_flight),
            executor: RecognitionExecutor::new(recognizer),
            clipboard,
            formatter: self.formatter,
            renderer: self.renderer,
            settings: self.settings,
            sink,
            display: DisplayState::default(),
            current_image: None,
        };
        session.show_clipboard_image();
        Ok(session)
    }
}
