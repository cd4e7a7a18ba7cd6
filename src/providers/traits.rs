//! Collaborator traits the session calls into.
//!
//! Everything that touches the outside world sits behind one of these
//! traits: the system clipboard, the remote recognition service, the LaTeX
//! renderer, the settings dialog and the UI itself. The session owns them
//! as `Arc<dyn …>` and only ever calls them from its own control context,
//! except for [`RecognitionProvider`], which runs on a worker task.
//!
//! # Failure semantics
//!
//! - Clipboard errors are logged and degraded: a failed read means "no
//!   image", a failed write is skipped.
//! - A recognition `Err` is a transport failure and is classified as
//!   "no response". Service-side failures are *not* errors here; they come
//!   back as a [`RecognitionResult`] with `error` set.

use async_trait::async_trait;

use crate::Result;
use crate::types::{ImageHandle, PresentationEvent, RecognitionResult};

// ============================================================================
// Clipboard
// ============================================================================

/// Access to the system clipboard.
pub trait ClipboardProvider: Send + Sync {
    /// Current clipboard image, or `None` when the clipboard holds no image.
    fn read_image(&self) -> Result<Option<ImageHandle>>;

    /// Replace the clipboard contents with text.
    fn write_text(&self, text: &str) -> Result<()>;
}

// ============================================================================
// Recognition
// ============================================================================

/// The remote recognition service.
#[async_trait]
pub trait RecognitionProvider: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Recognize the image.
    ///
    /// Runs on a worker task; must not assume it is called from the
    /// session's context.
    async fn recognize(&self, image: &ImageHandle) -> Result<RecognitionResult>;
}

// ============================================================================
// Formatting
// ============================================================================

/// Pure text transforms applied to recognition results.
pub trait Formatter: Send + Sync {
    /// Second candidate reading of `text`.
    fn derive_secondary(&self, text: &str) -> String;

    /// Third candidate reading of `text`.
    fn derive_third(&self, text: &str) -> String;

    /// User-facing message for an exception-carrying error string.
    fn format_exception(&self, error: &str) -> String;

    /// Whether `text` is one math expression wrapped in delimiters.
    fn is_fully_delimited_math(&self, text: &str) -> bool;
}

/// Renders a math expression to an image.
pub trait RenderProvider: Send + Sync {
    /// `None` when the expression cannot be rendered.
    fn render(&self, text: &str) -> Option<ImageHandle>;
}

// ============================================================================
// Settings dialog
// ============================================================================

/// Sections of the settings dialog the session may ask to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    Credentials,
    Proxy,
}

impl SettingsSection {
    /// Tab index in the settings dialog.
    pub fn index(self) -> usize {
        match self {
            Self::Credentials => 1,
            Self::Proxy => 2,
        }
    }
}

/// Remediation surface for credential and proxy errors.
pub trait SettingsDialog: Send + Sync {
    fn open(&self, section: SettingsSection);
}

// ============================================================================
// Presentation
// ============================================================================

/// Receives every display change the session makes.
pub trait PresentationSink: Send + Sync {
    fn present(&self, event: &PresentationEvent);
}
