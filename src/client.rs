// SPDX-License-Identifier: Apache-2.0

//! The invocation transport seam.
//!
//! [`InvokeClient`] is the single capability this crate needs from the
//! outside world: perform one remote call and hand back raw bytes plus the
//! platform's function-error marker. [`LambdaClient`] is the production
//! implementation over the AWS SDK; tests substitute deterministic doubles.

use std::future::Future;

use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;

use crate::error::{InvokeError, TransportError};
use crate::types::InvocationMode;

/// Raw outcome of one invocation, before any decoding.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    /// Response body bytes. May be empty.
    pub payload: Vec<u8>,
    /// Function-error marker reported out-of-band by the platform.
    /// `"Handled"` means the function itself raised the error; any other
    /// non-empty value means an abnormal termination.
    pub function_error: Option<String>,
}

/// Capability to perform one remote invocation.
///
/// The sole seam between the facade and the real network transport. Retries,
/// credentials, and connection pooling live behind this boundary.
pub trait InvokeClient {
    /// Invoke `name` at `qualifier` with the encoded `payload`, blocking or
    /// fire-and-forget per `mode`. Transport failures (network, auth,
    /// throttling, not-found) surface as [`TransportError`].
    fn invoke(
        &self,
        name: &str,
        qualifier: &str,
        mode: InvocationMode,
        payload: Vec<u8>,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// Production client backed by `aws_sdk_lambda`.
///
/// Holds no state of its own; concurrency safety is whatever the SDK client
/// provides (it is `Clone` + thread-safe).
#[derive(Debug, Clone)]
pub struct LambdaClient {
    inner: aws_sdk_lambda::Client,
}

impl LambdaClient {
    /// Wrap an already-configured SDK client.
    pub fn new(inner: aws_sdk_lambda::Client) -> Self {
        Self { inner }
    }

    /// Resolve ambient AWS configuration (credentials, region, endpoint) and
    /// build a ready-to-use client.
    ///
    /// Plain factory, not a cached global: configuration is read once per
    /// call. Fails with [`InvokeError::Config`] when the environment yields
    /// no usable region.
    pub async fn from_env() -> Result<Self, InvokeError> {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        if config.region().is_none() {
            return Err(InvokeError::Config {
                reason: "no AWS region resolved from the environment".to_string(),
            });
        }

        Ok(Self::new(aws_sdk_lambda::Client::new(&config)))
    }
}

fn invocation_type(mode: InvocationMode) -> InvocationType {
    match mode {
        InvocationMode::RequestResponse => InvocationType::RequestResponse,
        InvocationMode::Event => InvocationType::Event,
    }
}

impl InvokeClient for LambdaClient {
    async fn invoke(
        &self,
        name: &str,
        qualifier: &str,
        mode: InvocationMode,
        payload: Vec<u8>,
    ) -> Result<RawResponse, TransportError> {
        let output = self
            .inner
            .invoke()
            .function_name(name)
            .qualifier(qualifier)
            .invocation_type(invocation_type(mode))
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(|source| TransportError::new(source))?;

        Ok(RawResponse {
            payload: output
                .payload()
                .map(|blob| blob.as_ref().to_vec())
                .unwrap_or_default(),
            function_error: output.function_error().map(str::to_owned),
        })
    }
}
