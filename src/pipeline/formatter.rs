//! Result formatting: candidate collapsing, auxiliary actions, confidence.

use crate::providers::Formatter;
use crate::types::{
    CANDIDATE_SLOTS, CandidateSet, ConfidenceReading, RecognitionResult, ResultActions, SlotUpdate,
};

/// Derive the three candidate readings of `text`.
pub fn derive_candidates(text: &str, formatter: &dyn Formatter) -> CandidateSet {
    CandidateSet {
        primary: text.to_string(),
        secondary: formatter.derive_secondary(text),
        tertiary: formatter.derive_third(text),
    }
}

/// Slot updates for a candidate set, with redundant readings disabled.
///
/// 1. secondary equals primary: only the primary slot is populated
/// 2. tertiary equals secondary: primary and secondary are populated
/// 3. otherwise all three are populated
///
/// A primary equal to the tertiary but not the secondary keeps all three.
pub fn collapse(set: &CandidateSet) -> [SlotUpdate; CANDIDATE_SLOTS] {
    let primary = SlotUpdate::Populate(set.primary.clone());
    if set.secondary == set.primary {
        [primary, SlotUpdate::Disable, SlotUpdate::Disable]
    } else if set.tertiary == set.secondary {
        [
            primary,
            SlotUpdate::Populate(set.secondary.clone()),
            SlotUpdate::Disable,
        ]
    } else {
        [
            primary,
            SlotUpdate::Populate(set.secondary.clone()),
            SlotUpdate::Populate(set.tertiary.clone()),
        ]
    }
}

/// Everything the session presents for a successful result.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedResult {
    pub candidates: CandidateSet,
    pub slots: [SlotUpdate; CANDIDATE_SLOTS],
    pub actions: ResultActions,
    pub confidence: ConfidenceReading,
    /// The primary text is one delimited math expression worth rendering.
    pub renderable: bool,
}

pub fn format_result(result: &RecognitionResult, formatter: &dyn Formatter) -> FormattedResult {
    let candidates = derive_candidates(&result.text, formatter);
    let slots = collapse(&candidates);
    FormattedResult {
        slots,
        actions: ResultActions::from_artifacts(&result.math_ml, &result.tsv),
        confidence: ConfidenceReading::from_raw(result.confidence),
        renderable: formatter.is_fully_delimited_math(&result.text),
        candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::LatexFormatter;
    use crate::types::ConfidenceBand;

    fn populate(s: &str) -> SlotUpdate {
        SlotUpdate::Populate(s.to_string())
    }

    #[test]
    fn all_equal_populates_primary_only() {
        let slots = collapse(&CandidateSet::new("A", "A", "A"));
        assert_eq!(slots, [populate("A"), SlotUpdate::Disable, SlotUpdate::Disable]);
    }

    #[test]
    fn equal_tail_disables_tertiary() {
        let slots = collapse(&CandidateSet::new("A", "B", "B"));
        assert_eq!(slots, [populate("A"), populate("B"), SlotUpdate::Disable]);
    }

    #[test]
    fn distinct_populates_all() {
        let slots = collapse(&CandidateSet::new("A", "B", "C"));
        assert_eq!(slots, [populate("A"), populate("B"), populate("C")]);
    }

    #[test]
    fn primary_equal_to_tertiary_only_keeps_all() {
        let slots = collapse(&CandidateSet::new("A", "B", "A"));
        assert_eq!(slots, [populate("A"), populate("B"), populate("A")]);
    }

    #[test]
    fn formats_math_result() {
        let result = RecognitionResult::text("$x ^ { 2 }$", 0.01).with_math_ml("<math/>");
        let formatted = format_result(&result, &LatexFormatter);
        assert_eq!(
            formatted.slots,
            [populate("$x ^ { 2 }$"), populate("x ^ { 2 }"), populate("x^{2}")]
        );
        assert!(formatted.renderable);
        assert_eq!(formatted.actions.math_ml.as_deref(), Some("<math/>"));
        assert!(formatted.actions.tsv.is_none());
        assert_eq!(formatted.confidence.value, 0.03);
        assert_eq!(formatted.confidence.band, ConfidenceBand::Low);
    }

    #[test]
    fn formats_plain_text_result() {
        let result = RecognitionResult::text("hello world", 0.7);
        let formatted = format_result(&result, &LatexFormatter);
        assert_eq!(
            formatted.slots,
            [populate("hello world"), SlotUpdate::Disable, SlotUpdate::Disable]
        );
        assert!(!formatted.renderable);
        assert_eq!(formatted.confidence.band, ConfidenceBand::High);
    }
}
