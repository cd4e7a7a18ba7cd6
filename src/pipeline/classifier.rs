//! Response classification.
//!
//! A delivered result falls into exactly one [`Outcome`]. Service-reported
//! errors are sorted into an [`ErrorCategory`] by marker substrings checked
//! in a fixed order, so an error carrying several markers always lands in
//! the earliest category:
//!
//! 1. [`INVALID_CREDENTIALS_ERROR`] → `InvalidCredentials`
//! 2. [`INVALID_PROXY_CONFIG_ERROR`] → `InvalidProxyConfig`
//! 3. [`EXCEPTION_MARK`] → `Exception`
//! 4. anything else → `Generic`
//!
//! An absent result is `NoResponse`.

use crate::providers::SettingsSection;
use crate::types::RecognitionResult;

/// Error reported when the recognition service rejects the credentials.
pub const INVALID_CREDENTIALS_ERROR: &str = "Invalid credentials";

/// Error reported when the configured proxy cannot be used.
pub const INVALID_PROXY_CONFIG_ERROR: &str = "Invalid proxy configuration";

/// Substring marking an error that wraps an underlying exception.
pub const EXCEPTION_MARK: &str = "Exception";

/// Shown when a submit finds no image on the clipboard.
pub const NO_IMAGE_FOUND_IN_THE_CLIPBOARD_ERROR: &str = "No image found in the system clipboard";

/// Shown when no result was delivered at all.
pub const UNEXPECTED_ERROR: &str = "Unexpected error occurred";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    InvalidCredentials,
    InvalidProxyConfig,
    Exception,
    Generic,
    NoResponse,
}

impl ErrorCategory {
    /// Classify a service-reported error string. Never returns `NoResponse`.
    pub fn classify(error: &str) -> Self {
        if error.contains(INVALID_CREDENTIALS_ERROR) {
            Self::InvalidCredentials
        } else if error.contains(INVALID_PROXY_CONFIG_ERROR) {
            Self::InvalidProxyConfig
        } else if error.contains(EXCEPTION_MARK) {
            Self::Exception
        } else {
            Self::Generic
        }
    }

    /// Settings section that lets the user fix this error, if any.
    pub fn settings_section(self) -> Option<SettingsSection> {
        match self {
            Self::InvalidCredentials => Some(SettingsSection::Credentials),
            Self::InvalidProxyConfig => Some(SettingsSection::Proxy),
            _ => None,
        }
    }

    /// Whether previously displayed results are wiped for this error.
    pub fn clears_results(self) -> bool {
        matches!(self, Self::Generic | Self::NoResponse)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::InvalidProxyConfig => "invalid_proxy_config",
            Self::Exception => "exception",
            Self::Generic => "generic",
            Self::NoResponse => "no_response",
        }
    }
}

/// Classified result of one recognition request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(RecognitionResult),
    Failure {
        category: ErrorCategory,
        /// Raw error text, or [`UNEXPECTED_ERROR`] for `NoResponse`.
        message: String,
    },
}

impl Outcome {
    pub fn classify(result: Option<RecognitionResult>) -> Self {
        match result {
            None => Self::Failure {
                category: ErrorCategory::NoResponse,
                message: UNEXPECTED_ERROR.to_string(),
            },
            Some(RecognitionResult {
                error: Some(error), ..
            }) => Self::Failure {
                category: ErrorCategory::classify(&error),
                message: error,
            },
            Some(result) => Self::Success(result),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Self::Success(_) => None,
            Self::Failure { category, .. } => Some(*category),
        }
    }

    /// Metric/log label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Failure { category, .. } => category.as_str(),
        }
    }
}
