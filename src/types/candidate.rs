//! Candidate readings and their display slots

use serde::{Deserialize, Serialize};

/// Number of candidate slots shown to the user.
pub const CANDIDATE_SLOTS: usize = 3;

/// The three readings derived from a recognized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

impl CandidateSet {
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        tertiary: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            tertiary: tertiary.into(),
        }
    }
}

/// Change applied to one candidate slot after a successful recognition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "text", rename_all = "snake_case")]
pub enum SlotUpdate {
    /// Show this text and keep the slot actionable.
    Populate(String),
    /// Mark the slot non-actionable; its text is left as it was.
    Disable,
}

/// Display state of one candidate slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub text: String,
    pub enabled: bool,
}

impl Default for CandidateSlot {
    fn default() -> Self {
        Self {
            text: String::new(),
            enabled: true,
        }
    }
}

impl CandidateSlot {
    /// Whether the UI may offer a copy/use action on this slot.
    pub fn is_actionable(&self) -> bool {
        self.enabled && !self.text.is_empty()
    }

    pub fn apply(&mut self, update: &SlotUpdate) {
        match update {
            SlotUpdate::Populate(text) => self.text.clone_from(text),
            SlotUpdate::Disable => self.enabled = false,
        }
    }
}
