//! Collaborators used when the embedder does not supply its own.

use tracing::info;

use super::traits::{RenderProvider, SettingsDialog, SettingsSection};
use crate::types::ImageHandle;

/// Renderer that never renders, so every result shows the placeholder.
///
/// Math rendering lives outside this crate; embedders plug a real renderer
/// in through [`SessionBuilder::renderer`](crate::SessionBuilder::renderer).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRenderer;

impl RenderProvider for NoRenderer {
    fn render(&self, _text: &str) -> Option<ImageHandle> {
        None
    }
}

/// Settings dialog stand-in that only logs the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSettingsDialog;

impl SettingsDialog for LogSettingsDialog {
    fn open(&self, section: SettingsSection) {
        info!(
            section = ?section,
            index = section.index(),
            "settings dialog requested"
        );
    }
}
