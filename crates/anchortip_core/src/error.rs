//! Error types for anchortip.
//!
//! Configuration mistakes surface as errors. Requests the widget can degrade
//! around (unsupported reveal, dismissing a stale overlay) are not errors and
//! never reach this type.

use thiserror::Error;

/// Main error type for anchortip.
#[derive(Debug, Error)]
pub enum AnchorTipError {
    /// A required builder field was never set.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field (`anchor`, `container` or `content`).
        field: &'static str,
    },

    /// Tip dimensions or radius are out of range.
    #[error("Invalid tip: {message}")]
    InvalidTip {
        /// Human-readable error message.
        message: String,
    },

    /// Style or scenario file could not be read or parsed.
    #[error("Config error: {message}")]
    Config {
        /// Human-readable error message.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Log directory or appender setup failed.
    #[error("Logging error: {message}")]
    Logging {
        /// Human-readable error message.
        message: String,
    },
}

impl AnchorTipError {
    // ========== Constructors ==========

    /// Create a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create an invalid tip error.
    pub fn invalid_tip(message: impl Into<String>) -> Self {
        Self::InvalidTip { message: message.into() }
    }

    /// Create a new config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into(), source: None }
    }

    /// Create a new config error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config { message: message.into(), source: Some(Box::new(source)) }
    }

    /// Create a new logging error.
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging { message: message.into() }
    }

    // ========== Methods ==========

    /// Check if this error is a builder precondition violation.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "Builder",
            Self::InvalidTip { .. } => "Tip",
            Self::Config { .. } => "Config",
            Self::Logging { .. } => "Logging",
        }
    }

    /// Get actionable hint for the caller.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field: "anchor" } => Some("Call anchor() before build()"),
            Self::MissingField { field: "container" } => Some("Call container() before build()"),
            Self::MissingField { field: "content" } => Some("Call content() before build()"),
            Self::MissingField { .. } => None,
            Self::InvalidTip { .. } => Some("Tip width, height and corner radius must be >= 0"),
            Self::Config { .. } => Some("Check that the file exists and is valid JSON"),
            Self::Logging { .. } => Some("Check permissions on the log directory"),
        }
    }
}

// ========== Error Conversions ==========

/// Convert from std::io::Error to AnchorTipError.
impl From<std::io::Error> for AnchorTipError {
    fn from(err: std::io::Error) -> Self {
        AnchorTipError::Config { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

/// Convert from serde_json::Error to AnchorTipError.
impl From<serde_json::Error> for AnchorTipError {
    fn from(err: serde_json::Error) -> Self {
        AnchorTipError::Config { message: format!("JSON error: {err}"), source: Some(Box::new(err)) }
    }
}
