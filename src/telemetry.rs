//! Telemetry metric name constants.
//!
//! Centralised metric names for the recognition pipeline. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `clipocr_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `kind`: trigger kind: "refresh" or "submit"
//! - `decision`: what the session did with a trigger (see [`TriggerDecision`](crate::TriggerDecision))
//! - `outcome`: classified result (see [`Outcome::label`](crate::Outcome::label))
//! - `operation`: clipboard operation: "read_image" or "write_text"

/// Total trigger events received by the session.
///
/// Labels: `kind`, `decision`.
pub const TRIGGERS_TOTAL: &str = "clipocr_triggers_total";

/// Total recognition results classified.
///
/// Labels: `outcome`.
pub const REQUESTS_TOTAL: &str = "clipocr_requests_total";

/// Wall time of the recognition call on the worker, in seconds.
pub const REQUEST_DURATION_SECONDS: &str = "clipocr_request_duration_seconds";

/// Total failed clipboard operations.
///
/// Labels: `operation`.
pub const CLIPBOARD_ERRORS_TOTAL: &str = "clipocr_clipboard_errors_total";
