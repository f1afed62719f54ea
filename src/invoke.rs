// SPDX-License-Identifier: Apache-2.0

//! Synchronous and asynchronous invocation entry points.
//!
//! Both paths share the same shape: encode the payload, make exactly one
//! remote call through [`InvokeClient`], and surface every failure to the
//! caller immediately. No retries, no internal state.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::InvokeClient;
use crate::error::{FunctionError, InvokeError, InvokeResult};
use crate::types::{InvocationMode, InvokeInput};

/// Shape of a function-error body. Only `errorMessage` is read; the
/// `handled` classification comes from the out-of-band marker, never from
/// the body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "errorMessage", default)]
    error_message: String,
}

fn encode_payload<P: Serialize>(payload: &Option<P>) -> InvokeResult<Vec<u8>> {
    serde_json::to_vec(payload).map_err(|source| InvokeError::Encode { source })
}

/// A body the function did not populate. Decoding is skipped for these so an
/// absent payload round-trips to an untouched output slot.
fn is_empty_body(payload: &[u8]) -> bool {
    let body = payload.trim_ascii();
    body.is_empty() || body == b"null"
}

/// Invoke a function and wait for its output.
///
/// The response body is decoded into `out` when the caller supplies one;
/// `None` skips decoding entirely. If the platform reports a function-level
/// error, the call fails with [`InvokeError::Function`] carrying the decoded
/// `errorMessage` and a `handled` flag derived from the error marker.
///
/// Exactly one of {decoded output, classified error} results per call.
#[tracing::instrument(skip_all, fields(function = %input.name, qualifier = %input.qualifier))]
pub async fn invoke_sync<C, P, O>(
    client: &C,
    input: &InvokeInput<P>,
    out: Option<&mut O>,
) -> InvokeResult<()>
where
    C: InvokeClient,
    P: Serialize,
    O: DeserializeOwned,
{
    let payload = encode_payload(&input.payload)?;

    let response = client
        .invoke(
            input.name.as_str(),
            &input.qualifier,
            InvocationMode::RequestResponse,
            payload,
        )
        .await?;

    if let Some(marker) = response.function_error {
        let mut err = FunctionError::from_marker(&marker);

        if !is_empty_body(&response.payload) {
            let body: ErrorBody = serde_json::from_slice(&response.payload)
                .map_err(|source| InvokeError::Decode { source })?;
            err.message = body.error_message;
        }

        debug!(marker = %marker, handled = err.handled, "function reported an error");
        return Err(err.into());
    }

    if let Some(slot) = out {
        if !is_empty_body(&response.payload) {
            *slot = serde_json::from_slice(&response.payload)
                .map_err(|source| InvokeError::Decode { source })?;
        }
    }

    Ok(())
}

/// Invoke a function as a fire-and-forget event.
///
/// Succeeds as soon as the platform accepts the submission; the function's
/// eventual output or failure is unobservable here. Rejected submissions
/// (malformed request, auth, throttling) fail with
/// [`InvokeError::Transport`].
#[tracing::instrument(skip_all, fields(function = %input.name, qualifier = %input.qualifier))]
pub async fn invoke_async<C, P>(client: &C, input: &InvokeInput<P>) -> InvokeResult<()>
where
    C: InvokeClient,
    P: Serialize,
{
    let payload = encode_payload(&input.payload)?;

    client
        .invoke(
            input.name.as_str(),
            &input.qualifier,
            InvocationMode::Event,
            payload,
        )
        .await?;

    Ok(())
}
