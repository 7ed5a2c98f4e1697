//! Async HTTP client for the KDSM encryption API.
//!
//! Each operation is one POST with the API key header, followed by decoding
//! of the `{ success, data, error }` envelope. No retries, no timeout beyond
//! the transport defaults.

use crate::config::KdsmConfig;
use crate::error::KdsmResult;
use crate::types::*;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the KDSM API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct KdsmApiClient {
    client: Client,
    config: KdsmConfig,
}

impl KdsmApiClient {
    pub fn new(config: KdsmConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Client for `api_key` against the default base URL.
    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        Self::new(KdsmConfig::new(api_key))
    }

    pub fn config(&self) -> &KdsmConfig {
        &self.config
    }

    /// Sends `body` to `url` and unwraps the response envelope.
    ///
    /// The HTTP status is not inspected: error statuses from the server carry
    /// the same envelope and are surfaced through it.
    async fn post<T: DeserializeOwned>(&self, url: &str, body: &impl Serialize) -> KdsmResult<T> {
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        debug!("POST {url} -> {status}");

        let bytes = resp.bytes().await?;
        ApiResponse::<T>::from_body(status, &bytes)?.into_result()
    }

    /// Encrypts `message`, with the caller's `key` or a server-generated one.
    pub async fn encrypt(&self, message: &str, key: Option<&str>) -> KdsmResult<EncryptResult> {
        let req = EncryptRequest::new(message, key);
        self.post(&self.config.encrypt_url(), &req).await
    }

    pub async fn decrypt(&self, encrypted_message: &str, key: &str) -> KdsmResult<DecryptResult> {
        let req = DecryptRequest {
            encrypted_message,
            key,
        };
        self.post(&self.config.decrypt_url(), &req).await
    }
}
