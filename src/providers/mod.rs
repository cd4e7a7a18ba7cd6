//! Collaborator traits and the implementations shipped with the crate.
//!
//! The traits in [`traits`] are the seams to the outside world. The rest
//! of this module provides defaults ([`LatexFormatter`], [`NoRenderer`],
//! [`LogSettingsDialog`]) and in-memory collaborators for replay and tests.

pub mod defaults;
pub mod latex;
pub mod recording;
pub mod scripted;
pub mod traits;

pub use defaults::{LogSettingsDialog, NoRenderer};
pub use latex::LatexFormatter;
pub use recording::{RecordingSettings, RecordingSink};
pub use scripted::{ScriptedClipboard, ScriptedRecognizer};
pub use traits::{
    ClipboardProvider, Formatter, PresentationSink, RecognitionProvider, RenderProvider,
    SettingsDialog, SettingsSection,
};
