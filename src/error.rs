// SPDX-License-Identifier: Apache-2.0

//! Error types for the invocation facade.
//!
//! Explicit enum error types, no `anyhow::Result`. Each variant identifies
//! the stage that failed (encode, transport, decode) so callers can decide
//! their own retry policy; nothing is retried or logged here.

use thiserror::Error;

/// Marker value the platform attaches when the function itself reported the
/// failure. Any other non-empty marker means the platform terminated the
/// invocation abnormally (timeout, host signal).
pub const HANDLED_MARKER: &str = "Handled";

/// Top-level error type for one invocation.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("invalid function name: {reason}")]
    InvalidFunctionName { reason: &'static str },

    #[error("serializing payload: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("deserializing response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Function(#[from] FunctionError),

    #[error("loading AWS configuration: {reason}")]
    Config { reason: String },
}

/// The remote call itself failed: network, auth, throttling, not-found, or
/// a rejected submission. Wraps the underlying SDK failure as the source.
#[derive(Debug, Error)]
#[error("invoking function: {message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl TransportError {
    /// Wrap an underlying transport failure.
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// A transport failure with no structured source (test doubles mostly).
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

/// The remote function failed. Not a defect of this client: the invocation
/// completed and the platform reported a function-level error.
///
/// `handled` is derived exclusively from the platform's error marker, never
/// from the response body; the body only supplies `message`. Handled errors
/// were raised by the function code itself (e.g. validation), unhandled ones
/// were imposed by the host (e.g. timeout) and are the usual retry
/// candidates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", if *.handled { "handled" } else { "unhandled" }, .message)]
pub struct FunctionError {
    /// Error message decoded from the response body's `errorMessage` field.
    pub message: String,
    /// True if the function reported the error, false if the platform
    /// terminated the invocation abnormally.
    pub handled: bool,
}

impl FunctionError {
    /// Classify from the platform's out-of-band error marker.
    pub fn from_marker(marker: &str) -> Self {
        Self {
            message: String::new(),
            handled: marker == HANDLED_MARKER,
        }
    }
}

/// Result type alias using InvokeError.
pub type InvokeResult<T> = Result<T, InvokeError>;
