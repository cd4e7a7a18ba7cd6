//! Presentation events and the display state they build.
//!
//! The session never touches a UI directly. It emits [`PresentationEvent`]s
//! to a [`PresentationSink`](crate::providers::PresentationSink) and keeps
//! its own [`DisplayState`] in step by applying the same events, so the
//! state a sink reconstructs is always identical to the session's.

use serde::{Deserialize, Serialize};

use super::candidate::{CANDIDATE_SLOTS, CandidateSlot, SlotUpdate};
use super::confidence::ConfidenceReading;
use super::image::ImageHandle;

/// Contents of the rendered-equation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedEquation {
    Equation { image: ImageHandle },
    /// Fixed "render error" placeholder image.
    Placeholder,
}

/// Auxiliary copy actions offered for a successful result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultActions {
    #[serde(default, rename = "mathML", skip_serializing_if = "Option::is_none")]
    pub math_ml: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsv: Option<String>,
}

impl ResultActions {
    /// Offer an action only for non-empty artifacts.
    pub fn from_artifacts(math_ml: &str, tsv: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            math_ml: non_empty(math_ml),
            tsv: non_empty(tsv),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.math_ml.is_none() && self.tsv.is_none()
    }
}

/// A single change pushed to the presentation sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PresentationEvent {
    ClipboardImage { image: Option<ImageHandle> },
    RenderedEquation { rendered: Option<RenderedEquation> },
    /// Empty every slot and make it actionable again.
    ResetCandidates,
    /// Empty every slot's text, leaving enabled flags alone.
    ClearCandidateText,
    Candidates { updates: [SlotUpdate; CANDIDATE_SLOTS] },
    Actions { actions: ResultActions },
    /// Marks the primary slot as the one copied to the clipboard.
    CopiedIndicator { visible: bool },
    Confidence { reading: ConfidenceReading },
    Waiting { visible: bool },
    Error { message: String },
}

/// Everything currently on screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub clipboard_image: Option<ImageHandle>,
    pub rendered: Option<RenderedEquation>,
    pub candidates: [CandidateSlot; CANDIDATE_SLOTS],
    pub actions: ResultActions,
    pub copied_indicator: bool,
    pub confidence: ConfidenceReading,
    pub waiting: bool,
    /// Most recent error surfaced to the user.
    pub last_error: Option<String>,
}

impl DisplayState {
    pub fn apply(&mut self, event: &PresentationEvent) {
        match event {
            PresentationEvent::ClipboardImage { image } => self.clipboard_image.clone_from(image),
            PresentationEvent::RenderedEquation { rendered } => self.rendered.clone_from(rendered),
            PresentationEvent::ResetCandidates => {
                self.candidates = Default::default();
            }
            PresentationEvent::ClearCandidateText => {
                for slot in &mut self.candidates {
                    slot.text.clear();
                }
            }
            PresentationEvent::Candidates { updates } => {
                for (slot, update) in self.candidates.iter_mut().zip(updates) {
                    slot.apply(update);
                }
            }
            PresentationEvent::Actions { actions } => self.actions.clone_from(actions),
            PresentationEvent::CopiedIndicator { visible } => self.copied_indicator = *visible,
            PresentationEvent::Confidence { reading } => self.confidence = *reading,
            PresentationEvent::Waiting { visible } => self.waiting = *visible,
            PresentationEvent::Error { message } => self.last_error = Some(message.clone()),
        }
    }

    /// Texts of the slots the user may act on, in slot order.
    pub fn actionable_candidates(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .filter(|slot| slot.is_actionable())
            .map(|slot| slot.text.as_str())
            .collect()
    }
}
