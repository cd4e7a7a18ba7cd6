//! Recognition request orchestration pipeline.
//!
//! Leaf-first: [`debounce`] and [`single_flight`] decide whether a trigger
//! may act, [`executor`] runs the recognition call off the session's
//! context, [`classifier`] sorts the delivered result, and [`formatter`]
//! turns a success into candidate slots, actions and a confidence reading.
//! The [`Session`](crate::Session) wires them together.

pub mod classifier;
pub mod debounce;
pub mod executor;
pub mod formatter;
pub mod single_flight;

pub use classifier::{
    EXCEPTION_MARK, ErrorCategory, INVALID_CREDENTIALS_ERROR, INVALID_PROXY_CONFIG_ERROR,
    NO_IMAGE_FOUND_IN_THE_CLIPBOARD_ERROR, Outcome, UNEXPECTED_ERROR,
};
pub use debounce::{DEFAULT_DEBOUNCE_WINDOW, DebounceGate};
pub use executor::{Delivery, RecognitionExecutor};
pub use formatter::{FormattedResult, collapse, derive_candidates, format_result};
pub use single_flight::{SingleFlightGuard, SingleFlightPolicy};
