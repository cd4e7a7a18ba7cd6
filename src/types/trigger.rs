//! Trigger events and their key bindings

use serde::{Deserialize, Serialize};

/// A user-originated signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// Re-read the clipboard image.
    Refresh,
    /// Submit the current clipboard image for recognition.
    Submit,
}

impl TriggerKind {
    /// Map a key name to the trigger it fires.
    ///
    /// `space`, `backspace` and `insert` refresh; `enter` and `delete`
    /// submit. Matching is case-insensitive. Other keys fire nothing.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "space" | "backspace" | "back_space" | "insert" => Some(Self::Refresh),
            "enter" | "return" | "delete" => Some(Self::Submit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Refresh => "refresh",
            Self::Submit => "submit",
        }
    }
}

/// What the session did with a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerDecision {
    /// Refresh ran and re-read the clipboard image.
    Refreshed,
    /// Submit dispatched a recognition request.
    Dispatched,
    /// Suppressed by the debounce window.
    Debounced,
    /// Submit ignored because a request was already made for this image.
    AlreadySubmitted,
    /// Submit found no image on the clipboard.
    NoImage,
}

impl TriggerDecision {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Refreshed => "refreshed",
            Self::Dispatched => "dispatched",
            Self::Debounced => "debounced",
            Self::AlreadySubmitted => "already_submitted",
            Self::NoImage => "no_image",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_keys() {
        for key in ["space", "Backspace", "INSERT"] {
            assert_eq!(TriggerKind::from_key(key), Some(TriggerKind::Refresh), "{key}");
        }
    }

    #[test]
    fn submit_keys() {
        for key in ["enter", "Delete"] {
            assert_eq!(TriggerKind::from_key(key), Some(TriggerKind::Submit), "{key}");
        }
    }

    #[test]
    fn unbound_key_fires_nothing() {
        assert_eq!(TriggerKind::from_key("a"), None);
        assert_eq!(TriggerKind::from_key(""), None);
    }
}
