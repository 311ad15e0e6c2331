//! The `error` module defines custom error types used within the `blackbox-trigger` application.
//!
//! Two families exist. [`RelayError`] covers startup and fatal conditions that end
//! the process. [`MessageError`] covers a single bad delivery and never leaves the
//! message handler.

use thiserror::Error;

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, RelayError>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Startup and fatal errors of the relay.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Invalid settings, detected before any connection attempt
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Broker unreachable, refused, or lost
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Subscribe request rejected by the client or the broker
    #[error("Subscribe error: {message}")]
    Subscribe {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Notification could not be handed to the transport
    #[error("Publish error: {message}")]
    Publish {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl RelayError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn connection<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn subscribe(message: impl Into<String>) -> Self {
        Self::Subscribe {
            message: message.into(),
            source: None,
        }
    }

    pub fn publish<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Publish {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true for errors raised before the relay touched the network.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Failure to interpret a single inbound payload.
#[derive(Error, Debug)]
pub enum MessageError {
    #[error("payload is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("failed to parse JSON data: {text}")]
    Parse {
        text: String,
        #[source]
        source: serde_json::Error,
    },
}
