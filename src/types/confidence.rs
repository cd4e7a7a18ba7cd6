//! Confidence normalization and display bands.

use serde::{Deserialize, Serialize};

/// Smallest confidence shown for a strictly positive raw score.
pub const CONFIDENCE_FLOOR: f64 = 0.03;

/// Lower bound of the [`ConfidenceBand::Medium`] band.
pub const MEDIUM_THRESHOLD: f64 = 0.20;

/// Lower bound of the [`ConfidenceBand::High`] band.
pub const HIGH_THRESHOLD: f64 = 0.60;

/// Raise a strictly positive score below [`CONFIDENCE_FLOOR`] to the floor.
///
/// Zero and negative scores pass through unchanged so "no confidence" still
/// renders as an empty bar. NaN is treated as zero.
pub fn normalize(raw: f64) -> f64 {
    if raw.is_nan() {
        0.0
    } else if raw > 0.0 && raw < CONFIDENCE_FLOOR {
        CONFIDENCE_FLOOR
    } else {
        raw
    }
}

/// Display category of a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    Low,
    Medium,
    High,
}

impl ConfidenceBand {
    pub fn from_value(value: f64) -> Self {
        if value < MEDIUM_THRESHOLD {
            Self::Low
        } else if value < HIGH_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Accent colour used by the progress bar for this band.
    pub fn style_key(self) -> &'static str {
        match self {
            Self::Low => "#ec4d3d",
            Self::Medium => "#f8cd46",
            Self::High => "#63c956",
        }
    }
}

/// A normalized confidence value together with its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceReading {
    pub value: f64,
    pub band: ConfidenceBand,
}

impl ConfidenceReading {
    pub fn from_raw(raw: f64) -> Self {
        let value = normalize(raw);
        Self {
            value,
            band: ConfidenceBand::from_value(value),
        }
    }

    /// The reading shown when results are cleared.
    pub fn zero() -> Self {
        Self::from_raw(0.0)
    }
}

impl Default for ConfidenceReading {
    fn default() -> Self {
        Self::zero()
    }
}
