//! clipocr - Clipboard-driven OCR front-end orchestration
//!
//! This crate turns user key presses into recognition requests for the
//! image on the system clipboard, and recognition results into a set of
//! display updates: candidate readings, copy actions, a confidence
//! reading and error messages. The clipboard, the recognition service,
//! the equation renderer and the display are all collaborators behind
//! traits in [`providers`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use clipocr::providers::{RecordingSink, ScriptedClipboard, ScriptedRecognizer};
//! use clipocr::{ImageHandle, RecognitionResult, Session, TriggerKind};
//!
//! #[tokio::main]
//! async fn main() -> clipocr::Result<()> {
//!     let clipboard = Arc::new(ScriptedClipboard::with_image(ImageHandle::new(64, 32, vec![0u8; 16])));
//!     let recognizer = Arc::new(ScriptedRecognizer::new([Some(RecognitionResult::text(
//!         "$x^{2}$", 0.9,
//!     ))]));
//!     let sink = Arc::new(RecordingSink::new());
//!
//!     let mut session = Session::builder()
//!         .clipboard(clipboard)
//!         .recognizer(recognizer)
//!         .sink(sink)
//!         .build()?;
//!
//!     tokio::time::sleep(std::time::Duration::from_secs(1)).await;
//!     session.handle_trigger(TriggerKind::Submit);
//!     session.settle().await;
//!
//!     println!("{:?}", session.display().actionable_candidates());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod providers;
pub mod replay;
pub mod session;
pub mod telemetry;
pub mod types;

pub use config::{Config, LoggingConfig, SessionConfig};
pub use error::{ClipocrError, Result};
pub use pipeline::{Delivery, ErrorCategory, Outcome, SingleFlightPolicy};
pub use session::{Session, SessionBuilder};

pub use types::{
    CandidateSet, CandidateSlot, ConfidenceBand, ConfidenceReading, DisplayState, ImageHandle,
    PresentationEvent, RecognitionRequest, RecognitionResult, RenderedEquation, ResultActions,
    SlotUpdate, TriggerDecision, TriggerKind,
};

/// Package version, for `--version` output.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
