//! Public types for the clipocr API.

mod candidate;
mod confidence;
mod image;
mod presentation;
mod recognition;
mod trigger;

pub use candidate::{CANDIDATE_SLOTS, CandidateSet, CandidateSlot, SlotUpdate};
pub use confidence::{
    CONFIDENCE_FLOOR, ConfidenceBand, ConfidenceReading, HIGH_THRESHOLD, MEDIUM_THRESHOLD,
    normalize,
};
pub use image::ImageHandle;
pub use presentation::{DisplayState, PresentationEvent, RenderedEquation, ResultActions};
pub use recognition::{RecognitionRequest, RecognitionResult};
pub use trigger::{TriggerDecision, TriggerKind};
