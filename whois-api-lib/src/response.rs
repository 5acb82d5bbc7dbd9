//! Response wrapper and payload parsing.
//!
//! The vendor answers every request with a JSON envelope carrying one of
//! two optional top-level objects: `WhoisRecord` on success, or
//! `ErrorMessage` when its domain-level processing failed. HTTP status 200
//! does not guarantee the former shape, so the body is always read in full
//! and kept available for inspection.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::WhoisApiError;
use crate::types::{ErrorMessage, WhoisRecord};

/// An HTTP response with its body fully read into memory.
///
/// The body is read regardless of status code so that error payloads stay
/// available for parsing, and so the underlying connection is always
/// drained and returned to the pool.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code of the response
    pub status: StatusCode,

    /// Response headers
    pub headers: HeaderMap,

    /// Raw response body bytes
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Fail with a status-code error unless the status is in the success
    /// range (200–299).
    ///
    /// Only the raw-data path uses this; the typed-record path relies on
    /// payload-level error detection instead.
    pub fn check_status(&self) -> Result<(), WhoisApiError> {
        if !self.status.is_success() {
            return Err(WhoisApiError::status(self.status.as_u16()));
        }
        Ok(())
    }
}

/// Decoded response envelope. Both objects are optional on the wire;
/// the facade converts this into a definitive outcome.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiEnvelope {
    #[serde(rename = "WhoisRecord")]
    pub whois_record: Option<WhoisRecord>,

    #[serde(rename = "ErrorMessage")]
    pub error_message: Option<ErrorMessage>,
}

/// Decode the response body as an [`ApiEnvelope`].
///
/// All-or-nothing: malformed or truncated JSON fails with a parse error
/// carrying the decoder's message verbatim.
pub(crate) fn parse_envelope(body: &[u8]) -> Result<ApiEnvelope, WhoisApiError> {
    serde_json::from_slice(body).map_err(WhoisApiError::from)
}
