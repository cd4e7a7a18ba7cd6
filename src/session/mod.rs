//! The interactive session: owns all orchestration and display state.
//!
//! A [`Session`] is the single control context of a running front-end. It
//! receives trigger events, runs them through the debounce gate and the
//! single-flight guard, hands recognition calls to the executor and, when a
//! result comes back, classifies and presents it. Every mutation of the
//! display goes through [`Session::emit`], which updates the session's own
//! [`DisplayState`] and forwards the event to the presentation sink.
//!
//! # Flow
//!
//! ```text
//!  trigger ──► handle_trigger
//!                 ├─ refresh: reset guard ─► debounce ─► read clipboard
//!                 └─ submit:  guard ─► debounce ─► read clipboard ─► dispatch ──┐
//!                                                                              │ worker task
//!  present ◄── classify ◄── handle_delivery ◄── next_delivery ◄────────────────┘
//! ```
//!
//! Drive it either by calling [`handle_trigger`](Session::handle_trigger) and
//! [`next_delivery`](Session::next_delivery)/[`handle_delivery`](Session::handle_delivery)
//! directly, or hand it a trigger channel with [`run`](Session::run).

mod builder;

pub use builder::SessionBuilder;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::pipeline::{
    DebounceGate, Delivery, ErrorCategory, NO_IMAGE_FOUND_IN_THE_CLIPBOARD_ERROR, Outcome,
    RecognitionExecutor, SingleFlightGuard, format_result,
};
use crate::providers::{
    ClipboardProvider, Formatter, PresentationSink, RenderProvider, SettingsDialog,
};
use crate::telemetry;
use crate::types::{
    ConfidenceReading, DisplayState, ImageHandle, PresentationEvent, RecognitionResult,
    RenderedEquation, ResultActions, TriggerDecision, TriggerKind,
};

pub struct Session {
    gate: DebounceGate,
    guard: SingleFlightGuard,
    executor: RecognitionExecutor,
    clipboard: Arc<dyn ClipboardProvider>,
    formatter: Arc<dyn Formatter>,
    renderer: Arc<dyn RenderProvider>,
    settings: Arc<dyn SettingsDialog>,
    sink: Arc<dyn PresentationSink>,
    display: DisplayState,
    current_image: Option<ImageHandle>,
}

impl Session {
    /// Create a new builder for configuring a session.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Everything currently on screen.
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn gate(&self) -> &DebounceGate {
        &self.gate
    }

    pub fn guard(&self) -> &SingleFlightGuard {
        &self.guard
    }

    /// Whether a dispatched request has not been delivered yet.
    pub fn has_pending(&self) -> bool {
        self.executor.has_pending()
    }

    /// Handle a key press, if the key is bound to a trigger.
    pub fn handle_key(&mut self, key: &str) -> Option<TriggerDecision> {
        let Some(kind) = TriggerKind::from_key(key) else {
            debug!(key, "unbound key ignored");
            return None;
        };
        Some(self.handle_trigger(kind))
    }

    /// Handle one trigger event.
    ///
    /// Never blocks: a submit that passes both gates only spawns the
    /// recognition call. Requires a tokio runtime context for that spawn.
    pub fn handle_trigger(&mut self, kind: TriggerKind) -> TriggerDecision {
        let decision = match kind {
            TriggerKind::Refresh => self.refresh(),
            TriggerKind::Submit => self.submit(),
        };
        metrics::counter!(telemetry::TRIGGERS_TOTAL,
            "kind" => kind.as_str(),
            "decision" => decision.as_str(),
        )
        .increment(1);
        debug!(
            kind = kind.as_str(),
            decision = decision.as_str(),
            "trigger handled"
        );
        decision
    }

    fn refresh(&mut self) -> TriggerDecision {
        // any refresh, even a debounced one, allows a new submit
        self.guard.reset();

        if !self.gate.should_proceed(TriggerKind::Refresh, Instant::now()) {
            return TriggerDecision::Debounced;
        }
        self.show_clipboard_image();
        self.gate.complete(TriggerKind::Refresh, Instant::now());
        TriggerDecision::Refreshed
    }

    fn submit(&mut self) -> TriggerDecision {
        if !self.guard.try_acquire() {
            return TriggerDecision::AlreadySubmitted;
        }
        if !self.gate.should_proceed(TriggerKind::Submit, Instant::now()) {
            self.guard.release_unused();
            return TriggerDecision::Debounced;
        }

        self.show_clipboard_image();
        let decision = match self.current_image.clone() {
            Some(image) => {
                self.clear_for_dispatch();
                let request = self.executor.dispatch(image);
                info!(
                    request_id = request.id,
                    provider = self.executor.provider_name(),
                    "recognition requested"
                );
                TriggerDecision::Dispatched
            }
            None => {
                self.emit(PresentationEvent::Error {
                    message: NO_IMAGE_FOUND_IN_THE_CLIPBOARD_ERROR.to_string(),
                });
                self.guard.release_unused();
                TriggerDecision::NoImage
            }
        };
        self.gate.complete(TriggerKind::Submit, Instant::now());
        decision
    }

    /// Wait for the oldest outstanding request to deliver.
    ///
    /// `None` when nothing is outstanding. Cancel-safe.
    pub async fn next_delivery(&mut self) -> Option<Delivery> {
        self.executor.next_delivery().await
    }

    /// Classify a delivered result and present it.
    pub fn handle_delivery(&mut self, delivery: Delivery) -> Outcome {
        let request_id = delivery.request.id;
        let outcome = Outcome::classify(delivery.result);

        match &outcome {
            Outcome::Success(result) => self.present_success(result),
            Outcome::Failure { category, message } => self.present_failure(*category, message),
        }
        self.emit(PresentationEvent::Waiting { visible: false });
        self.guard.on_complete();

        metrics::counter!(telemetry::REQUESTS_TOTAL, "outcome" => outcome.label()).increment(1);
        info!(
            request_id,
            outcome = outcome.label(),
            elapsed_ms = delivery.elapsed.as_millis() as u64,
            "recognition delivered"
        );
        outcome
    }

    /// Process every outstanding delivery, oldest first.
    pub async fn settle(&mut self) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        while let Some(delivery) = self.next_delivery().await {
            outcomes.push(self.handle_delivery(delivery));
        }
        outcomes
    }

    /// Serve triggers from `triggers` until the channel closes, presenting
    /// results as they arrive, then drain outstanding requests.
    pub async fn run(&mut self, mut triggers: mpsc::Receiver<TriggerKind>) {
        loop {
            tokio::select! {
                trigger = triggers.recv() => match trigger {
                    Some(kind) => {
                        self.handle_trigger(kind);
                    }
                    None => break,
                },
                Some(delivery) = self.executor.next_delivery(), if self.executor.has_pending() => {
                    self.handle_delivery(delivery);
                }
            }
        }
        debug!(
            pending = self.executor.pending_count(),
            "trigger channel closed, settling"
        );
        self.settle().await;
    }

    fn present_success(&mut self, result: &RecognitionResult) {
        let formatted = format_result(result, self.formatter.as_ref());

        self.write_clipboard(&result.text);
        self.emit(PresentationEvent::CopiedIndicator { visible: true });
        self.emit(PresentationEvent::Actions {
            actions: formatted.actions,
        });

        let rendered = if formatted.renderable {
            match self.renderer.render(&result.text) {
                Some(image) => RenderedEquation::Equation { image },
                None => {
                    debug!("equation render failed, showing placeholder");
                    RenderedEquation::Placeholder
                }
            }
        } else {
            RenderedEquation::Placeholder
        };
        self.emit(PresentationEvent::RenderedEquation {
            rendered: Some(rendered),
        });

        self.emit(PresentationEvent::Candidates {
            updates: formatted.slots,
        });
        self.emit(PresentationEvent::Confidence {
            reading: formatted.confidence,
        });
    }

    fn present_failure(&mut self, category: ErrorCategory, message: &str) {
        let shown = match category {
            ErrorCategory::Exception => self.formatter.format_exception(message),
            _ => message.to_string(),
        };
        warn!(category = category.as_str(), error = %shown, "recognition failed");
        self.emit(PresentationEvent::Error { message: shown });

        if let Some(section) = category.settings_section() {
            self.settings.open(section);
        }
        if category.clears_results() {
            self.clear_results();
        }
    }

    /// Hide the previous result and show the waiting indicator.
    fn clear_for_dispatch(&mut self) {
        self.emit(PresentationEvent::ResetCandidates);
        self.emit(PresentationEvent::RenderedEquation { rendered: None });
        self.emit(PresentationEvent::CopiedIndicator { visible: false });
        self.emit(PresentationEvent::Actions {
            actions: ResultActions::default(),
        });
        self.emit(PresentationEvent::Waiting { visible: true });
    }

    /// Wipe images, candidate text and confidence after a failure.
    fn clear_results(&mut self) {
        // overwrite the clipboard so the failing image is not picked up again
        self.write_clipboard("");
        self.current_image = None;
        self.emit(PresentationEvent::ClipboardImage { image: None });
        self.emit(PresentationEvent::RenderedEquation { rendered: None });
        self.emit(PresentationEvent::ClearCandidateText);
        self.emit(PresentationEvent::Confidence {
            reading: ConfidenceReading::zero(),
        });
    }

    fn show_clipboard_image(&mut self) {
        let image = match self.clipboard.read_image() {
            Ok(image) => image,
            Err(e) => {
                metrics::counter!(telemetry::CLIPBOARD_ERRORS_TOTAL, "operation" => "read_image")
                    .increment(1);
                warn!(error = %e, "failed to read clipboard image");
                None
            }
        };
        self.current_image.clone_from(&image);
        self.emit(PresentationEvent::ClipboardImage { image });
    }

    fn write_clipboard(&self, text: &str) {
        if let Err(e) = self.clipboard.write_text(text) {
            metrics::counter!(telemetry::CLIPBOARD_ERRORS_TOTAL, "operation" => "write_text")
                .increment(1);
            warn!(error = %e, "failed to write clipboard text");
        }
    }

    fn emit(&mut self, event: PresentationEvent) {
        self.display.apply(&event);
        self.sink.present(&event);
    }
}
