// SPDX-License-Identifier: Apache-2.0

//! Thin helper for invoking AWS Lambda functions.
//!
//! Serializes a caller-supplied value to a JSON payload, submits the
//! invocation synchronously ("RequestResponse") or as a fire-and-forget
//! event, and decodes the response or classifies a function-level error.
//! Credentials, retries, and connection pooling stay with the AWS SDK; the
//! [`InvokeClient`] trait is the only seam, so tests run against in-memory
//! doubles.

pub mod client;
pub mod error;
pub mod invoke;
pub mod types;

// Re-export commonly used types
pub use client::{InvokeClient, LambdaClient, RawResponse};
pub use error::{FunctionError, InvokeError, InvokeResult, TransportError, HANDLED_MARKER};
pub use invoke::{invoke_async, invoke_sync};
pub use types::{FunctionName, InvocationMode, InvokeInput, DEFAULT_QUALIFIER};
