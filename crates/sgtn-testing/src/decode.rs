//! Decoding of the `{ data, error }` response envelope.

use serde::de::DeserializeOwned;
use serde_json::Value;

use sgtn_core::response::{BusinessError, ResponseEnvelope};

/// The body could not be read as a response envelope.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed response envelope: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode a response body. Success with neither field set is a legitimately
/// empty envelope, distinct from `Err`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<ResponseEnvelope<T>, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

/// Best-effort split into `(error, data)`.
///
/// A malformed body is logged and reported as `(None, None)`, leaving it to
/// the calling test's assertions to fail. Use [`decode`] to tell the two
/// cases apart.
pub fn error_and_data(body: &[u8]) -> (Option<BusinessError>, Option<Value>) {
    match decode::<Value>(body) {
        Ok(envelope) => envelope.into_parts(),
        Err(e) => {
            tracing::error!(error = %e, body_len = body.len(), "failed to decode response envelope");
            (None, None)
        }
    }
}
