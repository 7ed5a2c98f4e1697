//! Wire types for the KDSM API: request payloads, the response envelope
//! and the per-operation result payloads.

use crate::error::{KdsmError, KdsmResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message used when a failed envelope carries no `error` text.
pub const UNKNOWN_ERROR: &str = "request failed without an error message";

/// Body of `POST /encrypt`.
///
/// `key` is omitted from the JSON entirely when absent, never sent as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EncryptRequest<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'a str>,
}

impl<'a> EncryptRequest<'a> {
    /// An empty key counts as no key, letting the server generate one.
    pub fn new(message: &'a str, key: Option<&'a str>) -> Self {
        Self {
            message,
            key: key.filter(|k| !k.is_empty()),
        }
    }
}

/// Body of `POST /decrypt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptRequest<'a> {
    pub encrypted_message: &'a str,
    pub key: &'a str,
}

/// `data` payload of a successful encrypt call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptResult {
    pub encrypted_message: String,
    /// Key the server used; echoes the caller's key or a generated one.
    pub key: String,
    /// Any fields beyond the two above (`keyGenerated` included), kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EncryptResult {
    /// Whether the server generated the key, when it says so.
    pub fn key_generated(&self) -> Option<bool> {
        self.extra.get("keyGenerated").and_then(Value::as_bool)
    }
}

/// `data` payload of a successful decrypt call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptResult {
    pub decrypted_message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The response envelope, decoded into either its data or its error.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    Failure(String),
}

/// Envelope exactly as it appears on the wire. `data` stays untyped until
/// `success` is known, so a failure never trips over a mismatched payload.
#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// Text of a failed envelope's `error`; non-string values keep their JSON form.
fn error_message(error: Option<Value>) -> String {
    match error {
        None | Some(Value::Null) => UNKNOWN_ERROR.to_string(),
        Some(Value::String(message)) => message,
        Some(other) => other.to_string(),
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decodes a response body received with HTTP `status`.
    ///
    /// The status is only carried into errors; success is decided by the
    /// envelope's `success` flag, where missing or `null` means false.
    pub fn from_body(status: u16, body: &[u8]) -> KdsmResult<Self> {
        let raw: RawEnvelope = serde_json::from_slice(body)
            .map_err(|source| KdsmError::InvalidResponse { status, source })?;

        if !raw.success.unwrap_or(false) {
            return Ok(ApiResponse::Failure(error_message(raw.error)));
        }

        match raw.data {
            None | Some(Value::Null) => Err(KdsmError::MissingData { status }),
            Some(data) => serde_json::from_value(data)
                .map(ApiResponse::Success)
                .map_err(|source| KdsmError::InvalidResponse { status, source }),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// Unwraps the data, turning a failed envelope into [`KdsmError::Api`].
    pub fn into_result(self) -> KdsmResult<T> {
        match self {
            ApiResponse::Success(data) => Ok(data),
            ApiResponse::Failure(message) => Err(KdsmError::Api(message)),
        }
    }
}
