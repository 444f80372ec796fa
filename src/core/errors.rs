//! Error types for the rollcall library.
//!
//! Library operations return [`Result`] with a [`RollcallError`]. Resolution
//! failures reported by the platform get their own variants so the census
//! pipeline can print the matching console message and degrade to an empty
//! result instead of aborting.

use std::io;

use thiserror::Error;

/// Main result type for rollcall operations.
pub type Result<T> = std::result::Result<T, RollcallError>;

/// Error type for all rollcall operations.
#[derive(Error, Debug)]
pub enum RollcallError {
    /// I/O related errors (name lists, output files)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data type being serialized
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The channel does not exist or was deleted
    #[error("Channel '{channel}' is invalid")]
    ChannelInvalid {
        /// Channel name as entered
        channel: String,
    },

    /// The channel exists but cannot be accessed
    #[error("Channel '{channel}' is private")]
    ChannelPrivate {
        /// Channel name as entered
        channel: String,
    },

    /// Member details are hidden because the account is not a mutual contact
    #[error("User information requires a mutual contact")]
    NotMutualContact,

    /// The platform asked the client to back off
    #[error("Rate limit exceeded, retry after {seconds} seconds")]
    RateLimited {
        /// Required wait before the next request
        seconds: u64,
    },

    /// Transport or unexpected gateway failures
    #[error("Network error: {message}")]
    Network {
        /// Error description
        message: String,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },
}

impl RollcallError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new validation error naming the offending field
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Whether the error ends the current run rather than degrading one phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Console line shown to the user when a census phase fails.
    pub fn console_message(&self) -> String {
        match self {
            Self::ChannelInvalid { channel } => format!(
                "Error: Unable to access channel '{channel}'. It might be invalid or deleted."
            ),
            Self::ChannelPrivate { channel } => {
                format!("Error: Unable to access private channel '{channel}'.")
            }
            Self::NotMutualContact => {
                "Error: Unable to access user information. This user is not a mutual contact."
                    .to_string()
            }
            Self::RateLimited { seconds } => {
                format!("Error: Rate limit exceeded. Please wait {seconds} seconds.")
            }
            other => format!("Unexpected error: {other}"),
        }
    }
}

impl From<io::Error> for RollcallError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for RollcallError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for RollcallError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<reqwest::Error> for RollcallError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Serialization {
                message: format!("Gateway response could not be decoded: {err}"),
                data_type: Some("JSON".to_string()),
                source: Some(Box::new(err)),
            };
        }
        Self::network(err.to_string())
    }
}

impl From<url::ParseError> for RollcallError {
    fn from(err: url::ParseError) -> Self {
        Self::validation(format!("Invalid URL: {err}"))
    }
}
