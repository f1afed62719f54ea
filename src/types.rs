// SPDX-License-Identifier: Apache-2.0

//! Input types for function invocations.
//!
//! `FunctionName` follows the "Newtype" pattern: the one invariant the
//! invocation API cares about (a non-empty name) is enforced at construction
//! time, so `InvokeInput` is valid by construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvokeError;

/// Qualifier selecting the most recently deployed, unpublished version.
///
/// Any other string (a published version number or an alias) is passed
/// through to the platform unvalidated.
pub const DEFAULT_QUALIFIER: &str = "$LATEST";

/// Validated Lambda function name. Must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FunctionName(String);

impl FunctionName {
    /// Create a new FunctionName with validation.
    pub fn new(name: impl Into<String>) -> Result<Self, InvokeError> {
        let name = name.into();

        if name.is_empty() {
            return Err(InvokeError::InvalidFunctionName {
                reason: "function name cannot be empty",
            });
        }

        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for FunctionName {
    type Error = InvokeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FunctionName> for String {
    fn from(name: FunctionName) -> Self {
        name.0
    }
}

/// How the platform runs the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Blocking call; the caller waits for the function's output.
    RequestResponse,
    /// Fire-and-forget; the platform queues the event and returns immediately.
    Event,
}

/// One invocation request: target function, version qualifier, and an
/// optional payload to serialize as the request body.
///
/// Immutable once constructed; owned by the caller for the duration of a
/// single call to [`invoke_sync`](crate::invoke_sync) or
/// [`invoke_async`](crate::invoke_async).
#[derive(Debug, Clone)]
pub struct InvokeInput<P> {
    /// Target function name.
    pub name: FunctionName,
    /// Version or alias selector. Defaults to [`DEFAULT_QUALIFIER`].
    pub qualifier: String,
    /// Request payload. `None` encodes as JSON `null`.
    pub payload: Option<P>,
}

impl<P> InvokeInput<P> {
    /// Create an input targeting `name` at [`DEFAULT_QUALIFIER`].
    pub fn new(name: FunctionName, payload: Option<P>) -> Self {
        Self {
            name,
            qualifier: DEFAULT_QUALIFIER.to_string(),
            payload,
        }
    }

    /// Override the version qualifier.
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = qualifier.into();
        self
    }
}
