//! Recognition request and result types

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use super::image::ImageHandle;

/// A single submission of the current clipboard image.
///
/// Lives from the moment a submit trigger is honored until its result has
/// been classified.
#[derive(Debug, Clone)]
pub struct RecognitionRequest {
    /// Sequence number, increasing per session.
    pub id: u64,
    pub image: ImageHandle,
    pub submitted_at: Instant,
}

/// Structured result returned by the recognition service.
///
/// When `error` is set every other field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// MathML rendering, empty when the service produced none.
    #[serde(default, rename = "mathML")]
    pub math_ml: String,
    /// Tab-separated table rendering, empty when the service produced none.
    #[serde(default)]
    pub tsv: String,
    /// Service confidence in `[0, 1]`.
    #[serde(default)]
    pub confidence: f64,
}

impl RecognitionResult {
    /// A successful result carrying only text and confidence.
    pub fn text(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
            ..Default::default()
        }
    }

    /// A service-reported failure.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn with_math_ml(mut self, math_ml: impl Into<String>) -> Self {
        self.math_ml = math_ml.into();
        self
    }

    pub fn with_tsv(mut self, tsv: impl Into<String>) -> Self {
        self.tsv = tsv.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_field_names() {
        let json = r#"{"text":"$x$","mathML":"<math/>","tsv":"","confidence":0.8}"#;
        let result: RecognitionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.text, "$x$");
        assert_eq!(result.math_ml, "<math/>");
        assert!(result.error.is_none());
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let result: RecognitionResult = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(result.error.as_deref(), Some("boom"));
        assert!(result.text.is_empty());
        assert_eq!(result.confidence, 0.0);
    }
}
