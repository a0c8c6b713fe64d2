//! Assertion clients bound to the in-process service router.

use anyhow::Context as _;
use axum::Router;
use axum_test::{TestResponse, TestServer};
use serde::de::DeserializeOwned;
use serde_json::Value;

use sgtn_core::response::{BusinessError, ResponseEnvelope};

use crate::decode::{self, DecodeError};

/// HTTP assertion client. Failed assertions panic with the request and the
/// response body printed, which fails the calling test.
pub type AssertionClient = TestServer;

/// Build a client whose requests are dispatched straight into `router`
/// without opening a socket. Cookies set by responses are replayed on
/// later requests from the same client.
pub fn build_client(router: Router) -> anyhow::Result<AssertionClient> {
    TestServer::builder()
        .mock_transport()
        .save_cookies()
        .build(router)
        .context("failed to build in-process test client")
}

/// Envelope decoding straight off a test response.
pub trait EnvelopeExt {
    fn envelope<T: DeserializeOwned>(&self) -> Result<ResponseEnvelope<T>, DecodeError>;

    /// Best-effort `(error, data)`; see [`decode::error_and_data`].
    fn error_and_data(&self) -> (Option<BusinessError>, Option<Value>);
}

impl EnvelopeExt for TestResponse {
    fn envelope<T: DeserializeOwned>(&self) -> Result<ResponseEnvelope<T>, DecodeError> {
        decode::decode(self.as_bytes())
    }

    fn error_and_data(&self) -> (Option<BusinessError>, Option<Value>) {
        decode::error_and_data(self.as_bytes())
    }
}
